//! Token aggregation.
//!
//! The tokenizer reads one byte, fixes the token's group from it, then
//! keeps reading while the group's continuation rule accepts the next
//! byte. Every decision needs at most one byte of lookahead, and the byte
//! that ends a token is pushed back so the next token starts with it. The
//! two quoted groups are the exception: their closing quote belongs to the
//! lexeme and is consumed outright.

use ixc_util::{Handler, Span};

use crate::group::TokenGroup;
use crate::kind::TokenKind;
use crate::reader::Reader;
use crate::token::Token;

/// Lazy token stream over a [`Reader`].
///
/// One token of lookahead is kept so that
/// [`has_more_tokens`](Tokenizer::has_more_tokens) answers without
/// consuming anything. The tokenizer never fails: bytes that fit no class
/// come out as unknown-group tokens, and end of input is a normal stop.
///
/// # Example
///
/// ```
/// use ixc_lex::{Reader, Tokenizer, TokenKind};
///
/// let mut tokens = Tokenizer::new(Reader::from_str("foo.bar"));
/// assert!(tokens.has_more_tokens());
/// assert_eq!(tokens.next_token().unwrap().kind(), TokenKind::Word);
/// assert_eq!(tokens.next_token().unwrap().kind(), TokenKind::Symbol);
/// assert_eq!(tokens.next_token().unwrap().kind(), TokenKind::Word);
/// assert!(!tokens.has_more_tokens());
/// ```
pub struct Tokenizer<'h> {
    reader: Reader,
    handler: Option<&'h Handler>,
    lookahead: Option<Token>,
}

impl<'h> Tokenizer<'h> {
    /// Creates a tokenizer that keeps its observations to itself.
    pub fn new(reader: Reader) -> Self {
        Self {
            reader,
            handler: None,
            lookahead: None,
        }
    }

    /// Creates a tokenizer that reports oddities as warnings on `handler`.
    pub fn with_handler(reader: Reader, handler: &'h Handler) -> Self {
        Self {
            reader,
            handler: Some(handler),
            lookahead: None,
        }
    }

    /// Returns true if at least one more token can be produced.
    pub fn has_more_tokens(&mut self) -> bool {
        self.prime();
        self.lookahead.is_some()
    }

    /// Produces the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.prime();
        self.lookahead.take()
    }

    fn prime(&mut self) {
        if self.lookahead.is_none() {
            self.lookahead = self.scan();
        }
    }

    /// Reads one complete token from the reader.
    fn scan(&mut self) -> Option<Token> {
        let start = self.reader.position();
        let line = self.reader.line();
        let column = self.reader.column();

        let first = self.reader.read();
        if first == 0 {
            return None;
        }

        let group = TokenGroup::of_byte(first);
        let mut lexeme = vec![first];

        if group == TokenGroup::Escape {
            self.scan_escape(&mut lexeme);
        } else {
            self.scan_continuation(group, &mut lexeme, line, column);
        }

        let kind = TokenKind::refine(group, &lexeme);
        let span = Span::new(start, self.reader.position(), line, column);

        if group == TokenGroup::Unknown {
            self.warn(
                format!("unrecognized byte sequence {:?}", lexeme_preview(&lexeme)),
                span,
            );
        }

        Some(Token::new(lexeme, group, kind, span))
    }

    /// An escape lexeme is the backslash plus its payload byte. The byte
    /// after the payload is consumed and dropped, not pushed back.
    fn scan_escape(&mut self, lexeme: &mut Vec<u8>) {
        let payload = self.reader.read();
        if payload == 0 {
            return;
        }
        lexeme.push(payload);
        self.reader.read();
    }

    /// Extends `lexeme` while the group's continuation rule holds.
    fn scan_continuation(&mut self, group: TokenGroup, lexeme: &mut Vec<u8>, line: u32, column: u32) {
        let quoted = matches!(group, TokenGroup::String | TokenGroup::Char);
        loop {
            let next = self.reader.read();
            if next == 0 {
                if quoted {
                    let span = Span::new(
                        self.reader.position() - lexeme.len(),
                        self.reader.position(),
                        line,
                        column,
                    );
                    self.warn("unterminated quoted literal", span);
                }
                return;
            }

            if group.accepts(next) {
                lexeme.push(next);
                if next == b'\\' {
                    // In-lexeme escape: the quoted byte rides along so a
                    // quote after a backslash does not end the literal.
                    let escaped = self.reader.read();
                    if escaped != 0 {
                        lexeme.push(escaped);
                    }
                }
            } else if quoted {
                // The closing quote is part of the lexeme.
                lexeme.push(next);
                return;
            } else {
                self.reader.push_back();
                return;
            }
        }
    }

    fn warn(&self, message: impl Into<String>, span: Span) {
        if let Some(handler) = self.handler {
            handler.warning(message, span);
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

fn lexeme_preview(lexeme: &[u8]) -> String {
    lexeme
        .iter()
        .map(|b| format!("{b:#04x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
