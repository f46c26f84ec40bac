/// Core game interface for hangterm
use crossterm::event::KeyEvent;

/// Main game trait driven by `core::engine::Engine`.
/// Games are turn-based and own their state; the engine only forwards
/// input and draw calls.
pub trait Game {
    /// Handle a key press. `Esc` and `Ctrl+C` never reach the game.
    fn handle_input(&mut self, event: KeyEvent);

    /// Draw the current state into the Ratatui frame
    fn render(&self, frame: &mut ratatui::Frame);
}
