//! Pure status evaluation for hangman.
//!
//! Status is always a function of the word, the guessed set and the miss
//! count, never of the order guesses arrived in.

use std::collections::BTreeSet;

use serde::Serialize;

use super::word::Word;

/// Six body parts: head, torso, two arms, two legs.
pub const MAX_INCORRECT_GUESSES: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Lost is checked before Won: a sixth miss ends the game even if the
/// word happens to be fully revealed as well.
pub fn evaluate(word: &Word, guessed: &BTreeSet<char>, incorrect: u8) -> GameStatus {
    if incorrect >= MAX_INCORRECT_GUESSES {
        GameStatus::Lost
    } else if word.distinct_letters().is_subset(guessed) {
        GameStatus::Won
    } else {
        GameStatus::Playing
    }
}
