/// Word token vocabulary
///
/// Maps word tokens to small integer indices and back. A vocabulary is built
/// from an in-memory list of tokens or from a file holding one token per line.
pub mod vocab;

pub use vocab::{Dict, Idx, VocabError};
