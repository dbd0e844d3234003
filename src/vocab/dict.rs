use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, error, info, warn};

use super::error::{Result, VocabError};
use super::io::LineReader;
use super::types::Idx;

/// Word token dictionary
///
/// Maps every token to a unique [`Idx`]. Indices are assigned in insertion
/// order starting at 0 and are never reassigned, since tokens can't be removed.
///
/// Lookups by index scan every entry, there is no reverse map.
///
/// # Thread Safety
/// `Dict` holds no lock. Sharing it across threads for mutation needs an
/// outer `Mutex` or `RwLock`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dict {
    /// token -> index
    tokens: HashMap<String, Idx>,
    /// Index handed to the next added token, one past the highest index in use
    next: i64,
}

impl Dict {
    /// Build a dictionary where each token's index is its position in `tokens`
    ///
    /// A token that appears more than once keeps the index of its last
    /// occurrence. The positions of the other tokens are not shifted, so a
    /// list with duplicates leaves gaps in the index range.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = tokens.into_iter();
        let mut map = HashMap::with_capacity(tokens.size_hint().0);
        let mut next = 0;
        // Range first so zip stops without pulling a token it can't index
        for (position, token) in (0..=i32::MAX).zip(tokens.by_ref()) {
            map.insert(token.into(), Idx::new(position));
            next = i64::from(position) + 1;
        }
        if tokens.next().is_some() {
            warn!("Dropping tokens past position {}, no index left", i32::MAX);
        }
        Dict { tokens: map, next }
    }

    /// Empty dictionary with room for `capacity` tokens
    pub fn with_capacity(capacity: usize) -> Self {
        Dict {
            tokens: HashMap::with_capacity(capacity),
            next: 0,
        }
    }

    /// Load a dictionary from a file holding one token per line
    ///
    /// # Arguments
    /// * `path` - Path to a UTF-8 text file, one token per line
    ///
    /// # Errors
    /// Returns [`VocabError::Io`] if the file can't be opened and
    /// [`VocabError::Read`] if a line can't be read.
    ///
    /// Lines repeating an earlier token are skipped, the first occurrence keeps
    /// its index. The file is closed before this returns, on success or error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(source) => {
                error!("Failed to open token file {}", path.display());
                return Err(VocabError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let dict = match Self::from_reader(BufReader::new(file)) {
            Ok(d) => d,
            Err(err) => {
                error!("Failed to read token file {}: {}", path.display(), err);
                return Err(err);
            }
        };
        info!("Loaded {} tokens from {}", dict.size(), path.display());
        Ok(dict)
    }

    /// Load a dictionary from any buffered source, one token per line
    ///
    /// Same semantics as [`Dict::from_file`]: every line goes through
    /// [`Dict::add`] and duplicates are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dict = Dict::default();
        let mut lines = LineReader::new(reader);
        while let Some(token) = lines.read_token()? {
            match dict.add(token) {
                Ok(_) => {}
                Err(VocabError::DuplicateToken(token)) => {
                    debug!("Skipping duplicate token {:?} at line {}", token, lines.position());
                }
                Err(err) => return Err(err),
            }
        }
        Ok(dict)
    }

    /// Add a token, giving it the next unused index
    ///
    /// # Returns
    /// * `Result<Idx>` - The index assigned to the token
    ///
    /// The index equals the pre-add size unless [`Dict::new`] left gaps from
    /// duplicate input tokens, then it is one past the highest index in use.
    ///
    /// # Errors
    /// Returns [`VocabError::DuplicateToken`] if the token is already present,
    /// the dictionary is left untouched in that case.
    /// Returns [`VocabError::IndexOverflow`] once index `i32::MAX` is taken.
    pub fn add(&mut self, token: impl Into<String>) -> Result<Idx> {
        match self.tokens.entry(token.into()) {
            Entry::Occupied(entry) => Err(VocabError::DuplicateToken(entry.key().clone())),
            Entry::Vacant(entry) => {
                let idx = i32::try_from(self.next).map_err(|_| VocabError::IndexOverflow)?;
                entry.insert(Idx::new(idx));
                self.next += 1;
                Ok(Idx::new(idx))
            }
        }
    }

    /// Index of `token`
    ///
    /// # Errors
    /// Returns [`VocabError::TokenNotFound`] if the token is absent.
    /// Use [`Dict::index_or_missing`] to get [`Idx::MISSING`] instead.
    pub fn index(&self, token: &str) -> Result<Idx> {
        self.tokens
            .get(token)
            .copied()
            .ok_or_else(|| VocabError::TokenNotFound(token.to_string()))
    }

    /// Index of `token`, or [`Idx::MISSING`] (-1) if absent
    pub fn index_or_missing(&self, token: &str) -> Idx {
        self.index(token).unwrap_or(Idx::MISSING)
    }

    /// Token stored at `idx`, or the empty string if no token has that index
    ///
    /// An empty result is ambiguous: the empty string is a legal token.
    /// Check [`Dict::has_idx`] first when that matters.
    pub fn token(&self, idx: impl Into<Idx>) -> String {
        let idx = idx.into();
        self.tokens
            .iter()
            .find(|&(_, &i)| i == idx)
            .map(|(token, _)| token.clone())
            .unwrap_or_default()
    }

    pub fn has_idx(&self, idx: impl Into<Idx>) -> bool {
        let idx = idx.into();
        self.tokens.values().any(|&i| i == idx)
    }

    pub fn has_token(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    /// Number of tokens in the dictionary
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token/index pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Idx)> {
        self.tokens.iter().map(|(token, &idx)| (token.as_str(), idx))
    }
}

impl<S: Into<String>> FromIterator<S> for Dict {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dict::new(iter)
    }
}

impl From<Vec<String>> for Dict {
    fn from(tokens: Vec<String>) -> Self {
        Dict::new(tokens)
    }
}
