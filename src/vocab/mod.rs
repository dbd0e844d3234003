/// Vocabulary module for mapping word tokens to indices and back
///
/// The [`Dict`] type owns the token -> index mapping. Indices are handed out
/// in insertion order starting at zero and never change once assigned.
pub mod dict;
pub mod error;
pub mod io;
pub mod types;

pub use dict::Dict;
pub use error::{Result, VocabError};
pub use io::LineReader;
pub use types::Idx;
