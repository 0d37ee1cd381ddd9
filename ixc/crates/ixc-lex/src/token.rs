//! The token produced by the tokenizer.

use std::borrow::Cow;
use std::fmt;

use ixc_util::Span;

use crate::group::TokenGroup;
use crate::kind::TokenKind;

/// One lexeme with its two-layer classification and source span.
///
/// Tokens are immutable once constructed and own their lexeme bytes. Only
/// the tokenizer creates them; afterwards a token moves into a tree node
/// and lives as long as the tree. The lexeme is kept as raw bytes so that
/// concatenating every token of a file reproduces the file exactly, even
/// when the input contains bytes outside ASCII.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    lexeme: Vec<u8>,
    group: TokenGroup,
    kind: TokenKind,
    span: Span,
}

impl Token {
    pub(crate) fn new(lexeme: Vec<u8>, group: TokenGroup, kind: TokenKind, span: Span) -> Self {
        Self {
            lexeme,
            group,
            kind,
            span,
        }
    }

    /// The raw lexeme bytes.
    #[inline]
    pub fn lexeme(&self) -> &[u8] {
        &self.lexeme
    }

    /// The lexeme as text, with non-UTF-8 bytes replaced for display.
    pub fn lexeme_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.lexeme)
    }

    /// First byte of the lexeme. The byte that fixed the token's group.
    #[inline]
    pub fn first_byte(&self) -> u8 {
        self.lexeme.first().copied().unwrap_or(0)
    }

    /// Coarse classification.
    #[inline]
    pub fn group(&self) -> TokenGroup {
        self.group
    }

    /// Refined classification.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Where the lexeme sits in the source.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Lexeme length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    /// Returns true for a zero-length lexeme. Does not occur in practice.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.lexeme_str())
    }
}
