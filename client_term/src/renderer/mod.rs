pub mod draw;

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{supports_keyboard_enhancement, SetTitle},
};
use game_core::Snapshot;
use ratatui::DefaultTerminal;
use std::io::stdout;
use tracing::info;

/// Owns the terminal for the lifetime of the game and restores it on drop
pub struct RenderContext {
    terminal: DefaultTerminal,
    reports_release: bool,
}

impl RenderContext {
    pub fn new(caption: &str) -> anyhow::Result<Self> {
        let terminal = ratatui::try_init()?;
        // From here on Drop restores the terminal if anything fails
        let mut ctx = Self {
            terminal,
            reports_release: false,
        };

        execute!(stdout(), SetTitle(caption))?;
        if matches!(supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            ctx.reports_release = true;
        }

        let size = ctx.terminal.size()?;
        info!(
            caption,
            width = size.width,
            height = size.height,
            reports_release = ctx.reports_release,
            "Terminal ready"
        );
        Ok(ctx)
    }

    /// Whether the terminal sends key release events
    pub fn reports_key_release(&self) -> bool {
        self.reports_release
    }

    pub fn draw(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        self.terminal
            .draw(|frame| draw::draw_frame(frame, snapshot))?;
        Ok(())
    }
}

impl Drop for RenderContext {
    fn drop(&mut self) {
        if self.reports_release {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        ratatui::restore();
    }
}
