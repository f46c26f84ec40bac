use std::collections::BTreeSet;
use std::fmt;

use crate::error::HangmanError;

/// A validated secret word: non-empty, lowercase `a-z` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Vec<char>,
    distinct: BTreeSet<char>,
}

impl Word {
    /// Normalizes raw provider output (trim + ASCII lowercase) and validates it.
    pub fn parse(raw: &str) -> Result<Self, HangmanError> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(HangmanError::EmptyWord);
        }
        if let Some(found) = normalized.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(HangmanError::InvalidWord { word: normalized, found });
        }

        let letters: Vec<char> = normalized.chars().collect();
        let distinct = letters.iter().copied().collect();
        Ok(Self { letters, distinct })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Each letter once, regardless of how often it occurs.
    pub fn distinct_letters(&self) -> &BTreeSet<char> {
        &self.distinct
    }

    pub fn contains(&self, letter: char) -> bool {
        self.distinct.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
