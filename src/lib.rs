pub mod core {
	pub mod engine;
	pub mod game;
	pub mod renderer;
}

pub mod cli;
pub mod config;
pub mod error;
pub mod games;

// Re-export for convenience
pub use crate::core::game::Game;
pub use crate::error::HangmanError;
