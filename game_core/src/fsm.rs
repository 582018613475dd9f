//! Match State Machine
//!
//! Tracks whether the ball is in play, waiting to be served after a goal, or
//! the match has been decided and the winner is being announced.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    RoundOver,
    MatchOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// A goal that did not decide the match
    Goal,
    /// A goal that brought a player to the winning score
    MatchPoint,
    Serve,
    Rematch,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    phase: Phase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: Phase::Playing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: MatchAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::Playing, MatchAction::Goal) => Some(Phase::RoundOver),
            (Phase::Playing, MatchAction::MatchPoint) => Some(Phase::MatchOver),
            (Phase::RoundOver, MatchAction::Serve) => Some(Phase::Playing),
            (Phase::MatchOver, MatchAction::Rematch) => Some(Phase::Playing),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let fsm = MatchFsm::new();
        assert_eq!(fsm.phase(), Phase::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_goal_then_serve() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(MatchAction::Goal);
        assert!(result.success);
        assert_eq!(result.from, Phase::Playing);
        assert_eq!(result.to, Phase::RoundOver);

        fsm.transition(MatchAction::Serve);
        assert_eq!(fsm.phase(), Phase::Playing);
    }

    #[test]
    fn test_match_point_then_rematch() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::MatchPoint);
        assert_eq!(fsm.phase(), Phase::MatchOver);
        fsm.transition(MatchAction::Rematch);
        assert_eq!(fsm.phase(), Phase::Playing);
    }

    #[test]
    fn test_invalid_transitions_keep_phase() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(MatchAction::Serve);
        assert!(!result.success);
        assert_eq!(fsm.phase(), Phase::Playing);

        fsm.transition(MatchAction::MatchPoint);
        assert!(!fsm.can_transition(MatchAction::Serve));
        assert!(!fsm.can_transition(MatchAction::Goal));
        let result = fsm.transition(MatchAction::Goal);
        assert_eq!(result.to, Phase::MatchOver);
    }
}
