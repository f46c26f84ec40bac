use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::provider::WordProvider;
use super::rules::{self, GameStatus, MAX_INCORRECT_GUESSES};
use super::view::GameView;
use super::word::Word;
use crate::error::HangmanError;

/// Why a guess left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// No word has been fetched yet.
    NotStarted,
    /// The game is already won or lost.
    Finished,
    AlreadyGuessed,
}

/// Result of a single `submit_guess` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum GuessOutcome {
    Hit,
    Miss,
    Ignored(IgnoreReason),
}

/// State of one game. Replaced wholesale by `start_new_game`.
#[derive(Debug, Clone)]
struct Round {
    word: Word,
    guessed: BTreeSet<char>,
    incorrect: u8,
    status: GameStatus,
}

impl Round {
    fn new(word: Word) -> Self {
        Self {
            word,
            guessed: BTreeSet::new(),
            incorrect: 0,
            status: GameStatus::Playing,
        }
    }
}

/// Hangman rules engine: one secret word, a set of guesses and the
/// derived status.
///
/// The engine starts without a game; guesses are ignored until the first
/// successful `start_new_game`.
pub struct GameEngine {
    provider: Box<dyn WordProvider>,
    round: Option<Round>,
}

impl GameEngine {
    pub fn new(provider: impl WordProvider + 'static) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    pub fn from_boxed(provider: Box<dyn WordProvider>) -> Self {
        Self { provider, round: None }
    }

    /// Fetches a word and replaces any previous game.
    ///
    /// The word is validated before anything is touched, so a failing
    /// provider leaves the previous game exactly as it was.
    pub fn start_new_game(&mut self) -> Result<(), HangmanError> {
        let word = self.provider.next_word().and_then(|raw| Word::parse(&raw));
        let word = match word {
            Ok(word) => word,
            Err(e) => {
                warn!(error = %e, "word provider failed, keeping previous game");
                return Err(e);
            }
        };

        info!(length = word.len(), "starting new game");
        self.round = Some(Round::new(word));
        Ok(())
    }

    /// Submits one letter. Never fails; duplicates and guesses after the
    /// game ended are reported as `Ignored` and change nothing.
    pub fn submit_guess(&mut self, letter: char) -> GuessOutcome {
        let Some(round) = self.round.as_mut() else {
            debug!(%letter, "guess before game start ignored");
            return GuessOutcome::Ignored(IgnoreReason::NotStarted);
        };
        if round.status.is_terminal() {
            return GuessOutcome::Ignored(IgnoreReason::Finished);
        }

        let letter = normalize(letter);
        if !round.guessed.insert(letter) {
            return GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed);
        }

        let outcome = if round.word.contains(letter) {
            GuessOutcome::Hit
        } else {
            round.incorrect += 1;
            GuessOutcome::Miss
        };

        let previous = round.status;
        round.status = rules::evaluate(&round.word, &round.guessed, round.incorrect);
        debug!(%letter, ?outcome, incorrect = round.incorrect, "guess applied");
        if round.status != previous {
            info!(status = ?round.status, incorrect = round.incorrect, "game over");
        }

        outcome
    }

    /// Read-only projection for renderers. `None` before the first game.
    pub fn current_view(&self) -> Option<GameView> {
        self.round
            .as_ref()
            .map(|r| GameView::new(&r.word, &r.guessed, r.incorrect, r.status))
    }

    pub fn is_started(&self) -> bool {
        self.round.is_some()
    }

    pub fn status(&self) -> Option<GameStatus> {
        self.round.as_ref().map(|r| r.status)
    }

    pub fn incorrect_guesses(&self) -> u8 {
        self.round.as_ref().map_or(0, |r| r.incorrect)
    }

    pub fn remaining_guesses(&self) -> u8 {
        MAX_INCORRECT_GUESSES.saturating_sub(self.incorrect_guesses())
    }

    pub fn guessed(&self) -> Option<&BTreeSet<char>> {
        self.round.as_ref().map(|r| &r.guessed)
    }

    /// The unmasked secret word. Renderers should use `current_view`.
    pub fn word(&self) -> Option<&Word> {
        self.round.as_ref().map(|r| &r.word)
    }
}

/// Lowercases when that maps to exactly one char; otherwise keeps the input.
fn normalize(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => letter,
    }
}
