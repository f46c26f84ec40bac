use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::HangmanError;

/// Source of secret words. Called once per `start_new_game`.
///
/// The engine validates whatever comes back, so providers only need to
/// hand over a word; returning an error aborts the new game.
pub trait WordProvider {
    fn next_word(&mut self) -> Result<String, HangmanError>;
}

impl<F> WordProvider for F
where
    F: FnMut() -> String,
{
    fn next_word(&mut self) -> Result<String, HangmanError> {
        Ok(self())
    }
}

const DEFAULT_WORDS: &[&str] = &[
    "example", "rust", "terminal", "network", "socket", "hangman", "keyboard", "letter",
    "puzzle", "garden", "window", "bridge", "planet", "rocket", "forest", "candle",
    "silver", "market", "winter", "summer", "basket", "castle", "dragon", "engine",
    "flower", "guitar", "island", "jungle", "kitten", "ladder", "mirror", "number",
    "orange", "pencil", "rabbit", "saddle", "ticket", "velvet", "wizard", "yellow",
];

/// Picks words uniformly at random from a list.
pub struct RandomWords {
    words: Vec<String>,
    rng: StdRng,
}

impl RandomWords {
    /// Built-in list, seeded from the OS unless `seed` is given.
    pub fn builtin(seed: Option<u64>) -> Self {
        let words = DEFAULT_WORDS.iter().map(|w| w.to_string()).collect();
        Self { words, rng: make_rng(seed) }
    }

    /// Reads one word per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path, seed: Option<u64>) -> Result<Self, HangmanError> {
        let contents = fs::read_to_string(path).map_err(|source| HangmanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words: Vec<String> = parse_word_list(&contents);
        if words.is_empty() {
            return Err(HangmanError::EmptyWordList { path: path.to_path_buf() });
        }

        info!(path = %path.display(), count = words.len(), "loaded word list");
        Ok(Self { words, rng: make_rng(seed) })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordProvider for RandomWords {
    fn next_word(&mut self) -> Result<String, HangmanError> {
        if self.words.is_empty() {
            return Err(HangmanError::EmptyWord);
        }
        let idx = self.rng.random_range(0..self.words.len());
        debug!(idx, "picked word");
        Ok(self.words[idx].clone())
    }
}

/// Always hands out the same word.
#[derive(Debug, Clone)]
pub struct FixedWord(pub String);

impl WordProvider for FixedWord {
    fn next_word(&mut self) -> Result<String, HangmanError> {
        Ok(self.0.clone())
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::word::Word;

    #[test]
    fn test_builtin_words_are_all_playable() {
        for w in DEFAULT_WORDS {
            assert!(Word::parse(w).is_ok(), "{w} should be a valid secret word");
        }
    }

    #[test]
    fn test_seeded_provider_is_reproducible() {
        let mut a = RandomWords::builtin(Some(7));
        let mut b = RandomWords::builtin(Some(7));
        for _ in 0..10 {
            assert_eq!(a.next_word().unwrap(), b.next_word().unwrap());
        }
    }

    #[test]
    fn test_parse_word_list_skips_comments_and_blanks() {
        let words = parse_word_list("# animals\ncat\n\n  dog  \n#bird\nowl\n");
        assert_eq!(words, vec!["cat", "dog", "owl"]);
    }

    #[test]
    fn test_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("hangterm-words-{}.txt", std::process::id()));
        fs::write(&path, "cat\ndog\n").unwrap();

        let mut provider = RandomWords::from_file(&path, Some(1)).unwrap();
        assert_eq!(provider.len(), 2);
        let word = provider.next_word().unwrap();
        assert!(word == "cat" || word == "dog");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_rejects_empty_list() {
        let path = std::env::temp_dir().join(format!("hangterm-empty-{}.txt", std::process::id()));
        fs::write(&path, "# nothing here\n\n").unwrap();

        let result = RandomWords::from_file(&path, None);
        assert!(matches!(result, Err(HangmanError::EmptyWordList { .. })));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let result = RandomWords::from_file(Path::new("/definitely/not/here.txt"), None);
        assert!(matches!(result, Err(HangmanError::Io { .. })));
    }

    #[test]
    fn test_closure_provider() {
        let mut calls = 0;
        let mut provider = || {
            calls += 1;
            "cat".to_string()
        };
        assert_eq!(provider.next_word().unwrap(), "cat");
        drop(provider);
        assert_eq!(calls, 1);
    }
}
