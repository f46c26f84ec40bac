use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{error, info};

use crate::core::game::Game;
use crate::core::renderer::GameRenderer;
use super::engine::{GameEngine, GuessOutcome, IgnoreReason};
use super::renderer::{HangmanRenderer, HangmanScreen, ALPHABET};
use super::rules::GameStatus;

/// Interactive hangman: maps keys onto `GameEngine` operations.
/// No rules live here; the engine decides every outcome.
pub struct HangmanGame {
    engine: GameEngine,
    cursor: usize,
    message: String,
}

impl HangmanGame {
    pub fn new(engine: GameEngine) -> Self {
        let message = if engine.is_started() {
            "Guess the word!".to_string()
        } else {
            "Press Enter to start.".to_string()
        };
        Self { engine, cursor: 0, message }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The restart control: only honoured before the first game or after
    /// the current one ended.
    fn restart(&mut self) {
        let can_restart = self.engine.status().is_none_or(GameStatus::is_terminal);
        if !can_restart {
            return;
        }

        match self.engine.start_new_game() {
            Ok(()) => {
                info!("player started a new game");
                self.cursor = 0;
                self.message = "New game! Guess the word.".to_string();
            }
            Err(e) => {
                error!(error = %e, "could not start a new game");
                self.message = format!("Could not start a new game: {e}");
            }
        }
    }

    fn guess(&mut self, letter: char) {
        let outcome = self.engine.submit_guess(letter);
        self.message = match outcome {
            GuessOutcome::Hit => format!("Good guess! '{letter}' is in the word."),
            GuessOutcome::Miss => format!("Sorry, '{letter}' is not in the word."),
            GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed) => {
                format!("You already guessed '{letter}'.")
            }
            GuessOutcome::Ignored(IgnoreReason::Finished) => "The game is over.".to_string(),
            GuessOutcome::Ignored(IgnoreReason::NotStarted) => {
                "No game yet. Press Enter to start.".to_string()
            }
        };
    }

    fn move_cursor(&mut self, forward: bool) {
        let len = ALPHABET.len();
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }
}

impl Game for HangmanGame {
    fn handle_input(&mut self, event: KeyEvent) {
        let playing = self.engine.status() == Some(GameStatus::Playing);

        match event.code {
            KeyCode::Left => self.move_cursor(false),
            KeyCode::Right => self.move_cursor(true),
            KeyCode::Enter if playing => self.guess(ALPHABET[self.cursor]),
            KeyCode::Enter => self.restart(),
            KeyCode::Char(c)
                if !event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    && !c.is_whitespace() =>
            {
                self.guess(c)
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        let view = self.engine.current_view();
        let screen = HangmanScreen {
            view: view.as_ref(),
            cursor: self.cursor,
            message: &self.message,
        };
        HangmanRenderer::render(frame, &screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::provider::FixedWord;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn game(word: &str) -> HangmanGame {
        let mut engine = GameEngine::new(FixedWord(word.to_string()));
        engine.start_new_game().unwrap();
        HangmanGame::new(engine)
    }

    #[test]
    fn test_typed_letters_are_guesses() {
        let mut g = game("dog");
        g.handle_input(key(KeyCode::Char('D')));
        assert!(g.engine().guessed().unwrap().contains(&'d'));
        assert!(g.message().contains("is in the word"));

        g.handle_input(key(KeyCode::Char('x')));
        assert_eq!(g.engine().incorrect_guesses(), 1);
        assert!(g.message().contains("not in the word"));
    }

    #[test]
    fn test_cursor_and_enter_guess_highlighted_letter() {
        let mut g = game("cab");
        g.handle_input(key(KeyCode::Left));
        assert_eq!(g.cursor(), 25);
        g.handle_input(key(KeyCode::Right));
        g.handle_input(key(KeyCode::Right));
        assert_eq!(g.cursor(), 1);
        g.handle_input(key(KeyCode::Enter));
        assert!(g.engine().guessed().unwrap().contains(&'b'));
    }

    #[test]
    fn test_ctrl_chords_are_not_guesses() {
        let mut g = game("dog");
        g.handle_input(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert!(g.engine().guessed().unwrap().is_empty());
    }

    #[test]
    fn test_enter_restarts_only_when_over() {
        let mut g = game("a");
        g.handle_input(key(KeyCode::Char('a')));
        assert_eq!(g.engine().status(), Some(GameStatus::Won));

        g.handle_input(key(KeyCode::Char('b')));
        assert_eq!(g.message(), "The game is over.");

        g.handle_input(key(KeyCode::Enter));
        assert_eq!(g.engine().status(), Some(GameStatus::Playing));
        assert!(g.engine().guessed().unwrap().is_empty());
    }

    #[test]
    fn test_failed_restart_reports_error() {
        let mut engine = GameEngine::new(String::new);
        assert!(engine.start_new_game().is_err());
        let mut g = HangmanGame::new(engine);
        assert_eq!(g.message(), "Press Enter to start.");

        g.handle_input(key(KeyCode::Enter));
        assert!(!g.engine().is_started());
        assert!(g.message().starts_with("Could not start a new game"));
    }
}
