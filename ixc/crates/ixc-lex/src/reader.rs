//! Byte reader with one-byte pushback.
//!
//! The tokenizer decides where a token ends by reading exactly one byte
//! past it and handing that byte back, so the reader supports a pushback
//! depth of one and nothing more.

use std::path::Path;

/// A pull-mode byte source over an in-memory buffer.
///
/// The whole file is loaded at construction; [`read`](Reader::read)
/// returns `0` at end of input, which doubles as the "no byte" sentinel
/// since Ix sources never contain NUL. Line and column (1-based) track the
/// position of the *next* byte to be read.
///
/// # Example
///
/// ```
/// use ixc_lex::Reader;
///
/// let mut reader = Reader::from_str("ab");
/// assert_eq!(reader.read(), b'a');
/// assert_eq!(reader.read(), b'b');
/// assert_eq!(reader.read(), 0);
/// ```
pub struct Reader {
    buf: Vec<u8>,
    pos: usize,
    line: u32,
    column: u32,
    // Snapshot of (line, column) before the most recent read, for pushback.
    prev_line: u32,
    prev_column: u32,
}

impl Reader {
    /// Opens `path` and loads its full contents.
    ///
    /// A path that cannot be read yields a reader over an empty buffer;
    /// the first [`read`](Reader::read) returns `0` and the tokenizer sees
    /// no tokens. Missing-file reporting is the driver's concern, checked
    /// before the pipeline runs.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let buf = std::fs::read(path).unwrap_or_default();
        Self::from_bytes(buf)
    }

    /// Creates a reader over an in-memory byte buffer.
    pub fn from_bytes(buf: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
            line: 1,
            column: 1,
            prev_line: 1,
            prev_column: 1,
        }
    }

    /// Creates a reader over a string slice.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &str) -> Self {
        Self::from_bytes(source.as_bytes().to_vec())
    }

    /// Returns the next byte, or `0` at end of input.
    pub fn read(&mut self) -> u8 {
        if self.pos >= self.buf.len() {
            return 0;
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        self.prev_line = self.line;
        self.prev_column = self.column;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        b
    }

    /// Rewinds one position, returning the last byte to the stream.
    ///
    /// Pushback depth is exactly one: callers must not push back twice
    /// without an intervening [`read`](Reader::read). Does nothing at the
    /// start of input.
    pub fn push_back(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
            self.line = self.prev_line;
            self.column = self.prev_column;
        }
    }

    /// Byte offset of the next byte to be read.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Line number of the next byte (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column number of the next byte (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true if every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Total length of the underlying buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
