/// Hangman: a rules engine plus its terminal front end.
pub mod engine;
pub mod game;
pub mod provider;
pub mod renderer;
pub mod rules;
pub mod view;
pub mod word;

pub use engine::{GameEngine, GuessOutcome, IgnoreReason};
pub use game::HangmanGame;
pub use provider::{FixedWord, RandomWords, WordProvider};
pub use renderer::HangmanRenderer;
pub use rules::{GameStatus, MAX_INCORRECT_GUESSES};
pub use view::GameView;
pub use word::Word;
