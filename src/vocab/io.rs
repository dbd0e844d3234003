use std::io::BufRead;
use super::error::{Result, VocabError};

/// Reads newline-delimited tokens from any buffered source
///
/// Each line is one token. The `\n` terminator and a `\r` right before it
/// are stripped, nothing else is trimmed. The last line may or may not end
/// with a terminator.
pub struct LineReader<R: BufRead> {
    buffer: R,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(buffer: R) -> Self {
        LineReader {
            buffer,
            line: 0,
        }
    }

    /// Number of lines read so far (1-based line number of the last token)
    pub fn position(&self) -> usize {
        self.line
    }

    /// Read the next token, `None` once the source is exhausted
    pub fn read_token(&mut self) -> Result<Option<String>> {
        let mut token = String::new();
        let read = self
            .buffer
            .read_line(&mut token)
            .map_err(|source| VocabError::Read { line: self.line + 1, source })?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;

        if token.ends_with('\n') {
            token.pop();
        }
        if token.ends_with('\r') {
            token.pop();
        }
        Ok(Some(token))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_token().transpose()
    }
}
