use std::path::PathBuf;

use tracing::info;

use crate::error::HangmanError;
use crate::games::hangman::{FixedWord, RandomWords, WordProvider};

pub const DEFAULT_LOG_FILE: &str = "hangterm.log";

/// Runtime settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list file; the built-in list when `None`.
    pub words: Option<PathBuf>,
    /// Fixes the word order for reproducible sessions.
    pub seed: Option<u64>,
    /// Always use this word. Takes precedence over `words`.
    pub fixed_word: Option<String>,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: None,
            seed: None,
            fixed_word: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Builds the provider this configuration asks for.
    /// Word list problems surface here, before any game starts.
    pub fn word_provider(&self) -> Result<Box<dyn WordProvider>, HangmanError> {
        if let Some(word) = &self.fixed_word {
            info!("using fixed word provider");
            return Ok(Box::new(FixedWord(word.clone())));
        }

        let provider = match &self.words {
            Some(path) => RandomWords::from_file(path, self.seed)?,
            None => RandomWords::builtin(self.seed),
        };
        info!(words = provider.len(), seeded = self.seed.is_some(), "using random word provider");
        Ok(Box::new(provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_fixed_word_wins_over_list() {
        let config = Config {
            words: Some(PathBuf::from("/does/not/matter")),
            fixed_word: Some("cat".into()),
            ..Config::default()
        };
        let mut provider = config.word_provider().unwrap();
        assert_eq!(provider.next_word().unwrap(), "cat");
    }

    #[test]
    fn test_missing_word_list_fails_fast() {
        let config = Config {
            words: Some(Path::new("/no/such/words.txt").to_path_buf()),
            ..Config::default()
        };
        assert!(matches!(config.word_provider(), Err(HangmanError::Io { .. })));
    }

    #[test]
    fn test_seed_makes_builtin_reproducible() {
        let config = Config { seed: Some(42), ..Config::default() };
        let mut a = config.word_provider().unwrap();
        let mut b = config.word_provider().unwrap();
        assert_eq!(a.next_word().unwrap(), b.next_word().unwrap());
    }
}
