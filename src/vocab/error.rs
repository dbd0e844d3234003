use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VocabError>;

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("Couldn't open token file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't read token at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Token {0:?} already exists in the vocabulary.")]
    DuplicateToken(String),

    #[error("Token {0:?} does not exist in the vocabulary.")]
    TokenNotFound(String),

    #[error("Vocabulary is full: no index left past {}", i32::MAX)]
    IndexOverflow,
}

impl VocabError {
    /// True when the error came from opening or reading the token source
    pub fn is_io(&self) -> bool {
        matches!(self, VocabError::Io { .. } | VocabError::Read { .. })
    }
}
