use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::core::game::Game;

/// How long to wait for input before redrawing.
const IDLE_POLL: Duration = Duration::from_millis(16);

/// Drives a single `Game` on the terminal: draw, then read input.
pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Runs until the player quits. The caller owns terminal setup and restore.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        info!("engine loop started");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            if event::poll(IDLE_POLL)? {
                if let Event::Key(key) = event::read()? {
                    if self.dispatch(key).is_break() {
                        break;
                    }
                }
            }
        }

        info!("engine loop finished");
        Ok(self.game)
    }

    /// Routes one key event. Breaks on `Esc` or `Ctrl+C`.
    pub fn dispatch(&mut self, key: KeyEvent) -> ControlFlow<()> {
        // Some platforms report releases and repeats as well.
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue(());
        }

        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || ctrl_c {
            debug!("quit requested");
            return ControlFlow::Break(());
        }

        self.game.handle_input(key);
        ControlFlow::Continue(())
    }
}
