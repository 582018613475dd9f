//! Keyboard input handling
//!
//! Terminals that support the kitty keyboard protocol report key releases,
//! so a key is held from press to release. Elsewhere only presses and
//! auto-repeats arrive, and a key counts as held for a short window after the
//! last one.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{Controls, Key};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a key stays held without a fresh press or repeat event
pub const KEY_HOLD: Duration = Duration::from_millis(150);

/// Map a terminal key to a paddle key
pub fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::LeftUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::LeftDown),
        KeyCode::Up => Some(Key::RightUp),
        KeyCode::Down => Some(Key::RightDown),
        _ => None,
    }
}

/// Esc, `q` or Ctrl-C
pub fn is_quit(event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Tracks which paddle keys are currently held
#[derive(Debug)]
pub struct KeyTracker {
    last_seen: HashMap<Key, Instant>,
    reports_release: bool,
    hold: Duration,
}

impl KeyTracker {
    pub fn new(reports_release: bool) -> Self {
        Self {
            last_seen: HashMap::new(),
            reports_release,
            hold: KEY_HOLD,
        }
    }

    pub fn handle(&mut self, event: &KeyEvent, now: Instant) {
        let Some(key) = key_for(event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(key, now);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&key);
            }
        }
    }

    /// Snapshot of held keys at `now`
    pub fn controls(&self, now: Instant) -> Controls {
        let mut controls = Controls::new();
        for (key, seen) in &self.last_seen {
            if self.reports_release || now.saturating_duration_since(*seen) <= self.hold {
                controls.press(*key);
            }
        }
        controls
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_for(KeyCode::Char('w')), Some(Key::LeftUp));
        assert_eq!(key_for(KeyCode::Char('S')), Some(Key::LeftDown));
        assert_eq!(key_for(KeyCode::Up), Some(Key::RightUp));
        assert_eq!(key_for(KeyCode::Down), Some(Key::RightDown));
        assert_eq!(key_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&press(KeyCode::Esc)));
        assert!(is_quit(&press(KeyCode::Char('q'))));
        assert!(is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit(&press(KeyCode::Char('c'))));
        assert!(!is_quit(&release(KeyCode::Esc)));
    }

    #[test]
    fn test_held_until_release_when_supported() {
        let mut tracker = KeyTracker::new(true);
        let start = Instant::now();
        tracker.handle(&press(KeyCode::Up), start);

        let later = start + Duration::from_secs(2);
        assert!(tracker.controls(later).is_pressed(Key::RightUp));

        tracker.handle(&release(KeyCode::Up), later);
        assert!(!tracker.controls(later).is_pressed(Key::RightUp));
    }

    #[test]
    fn test_press_expires_without_release_events() {
        let mut tracker = KeyTracker::new(false);
        let start = Instant::now();
        tracker.handle(&press(KeyCode::Char('w')), start);

        assert!(tracker.controls(start + KEY_HOLD).is_pressed(Key::LeftUp));
        assert!(!tracker
            .controls(start + KEY_HOLD + Duration::from_millis(1))
            .is_pressed(Key::LeftUp));
    }

    #[test]
    fn test_repeat_extends_hold() {
        let mut tracker = KeyTracker::new(false);
        let start = Instant::now();
        tracker.handle(&press(KeyCode::Char('s')), start);
        let repeat = KeyEvent::new_with_kind(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        );
        tracker.handle(&repeat, start + Duration::from_millis(100));

        let controls = tracker.controls(start + Duration::from_millis(200));
        assert!(controls.is_pressed(Key::LeftDown));
        assert_eq!(controls.direction(game_core::Side::Left), 1);
    }

    #[test]
    fn test_clear_drops_all_keys() {
        let mut tracker = KeyTracker::new(true);
        let now = Instant::now();
        tracker.handle(&press(KeyCode::Up), now);
        tracker.handle(&press(KeyCode::Char('w')), now);
        tracker.clear();
        assert_eq!(tracker.controls(now), Controls::new());
    }
}
