use std::collections::BTreeSet;

use serde::Serialize;

use super::rules::{GameStatus, MAX_INCORRECT_GUESSES};
use super::word::Word;

/// Placeholder shown for letters not yet revealed.
pub const MASK: char = '\u{2022}';

/// Everything a renderer may know about the current game.
///
/// The secret word itself only appears in `answer`, and only once the game
/// is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub slots: Vec<Option<char>>,
    pub guessed: Vec<char>,
    pub incorrect_guesses: u8,
    pub max_incorrect_guesses: u8,
    pub status: GameStatus,
    pub answer: Option<String>,
}

impl GameView {
    pub(crate) fn new(
        word: &Word,
        guessed: &BTreeSet<char>,
        incorrect_guesses: u8,
        status: GameStatus,
    ) -> Self {
        let slots = word
            .letters()
            .iter()
            .map(|c| guessed.contains(c).then_some(*c))
            .collect();

        Self {
            slots,
            guessed: guessed.iter().copied().collect(),
            incorrect_guesses,
            max_incorrect_guesses: MAX_INCORRECT_GUESSES,
            status,
            answer: status.is_terminal().then(|| word.to_string()),
        }
    }

    pub fn word_len(&self) -> usize {
        self.slots.len()
    }

    /// The word with unrevealed positions replaced by `placeholder`.
    pub fn masked(&self, placeholder: char) -> String {
        self.slots.iter().map(|s| s.unwrap_or(placeholder)).collect()
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.binary_search(&letter).is_ok()
    }

    pub fn remaining_guesses(&self) -> u8 {
        self.max_incorrect_guesses.saturating_sub(self.incorrect_guesses)
    }
}
