use std::path::PathBuf;

/// Errors raised while sourcing or validating a secret word.
///
/// Guessing never fails; only starting a game can.
#[derive(Debug, thiserror::Error)]
pub enum HangmanError {
    #[error("invalid word source: provider returned an empty word")]
    EmptyWord,

    #[error("invalid word source: {word:?} contains {found:?}, only a-z can be guessed")]
    InvalidWord { word: String, found: char },

    #[error("word list {} has no usable words", path.display())]
    EmptyWordList { path: PathBuf },

    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
