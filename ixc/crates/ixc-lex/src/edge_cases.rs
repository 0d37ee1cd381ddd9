//! Edge case and property tests for the lexical layer.

use proptest::prelude::*;

use crate::{Reader, Token, TokenGroup, TokenKind, Tokenizer};

fn tokenize(source: &[u8]) -> Vec<Token> {
    Tokenizer::new(Reader::from_bytes(source.to_vec())).collect()
}

// ==================== EDGE CASES ====================

/// EDGE CASE: Whitespace-only input still produces tokens.
#[test]
fn test_edge_whitespace_only() {
    let tokens = tokenize(b" \t\n");
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.group() == TokenGroup::Whitespace));
}

/// EDGE CASE: A whitespace run is one token, kinded by its first byte.
#[test]
fn test_edge_whitespace_run_aggregates() {
    let tokens = tokenize(b"  \t\nx");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), TokenKind::Space);
    assert_eq!(tokens[0].lexeme(), b"  \t\n");
}

/// EDGE CASE: A lone opening bracket at end of input.
#[test]
fn test_edge_lone_bracket() {
    let tokens = tokenize(b"(");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::StartExpression);
}

/// EDGE CASE: Value lexemes may absorb hex digits even without `0x`.
#[test]
fn test_edge_trailing_hex_digits() {
    let tokens = tokenize(b"123abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].group(), TokenGroup::Value);
    assert_eq!(tokens[0].lexeme(), b"123abc");
}

/// EDGE CASE: An empty string literal is two quotes in one lexeme.
#[test]
fn test_edge_empty_string_literal() {
    let tokens = tokenize(b"\"\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme(), b"\"\"");
}

/// EDGE CASE: Non-ASCII bytes come through byte-for-byte.
#[test]
fn test_edge_non_ascii_bytes_preserved() {
    let source = [b'a', 0xc3, 0xa9, b'b'];
    let tokens = tokenize(&source);
    let joined: Vec<u8> = tokens.iter().flat_map(|t| t.lexeme().to_vec()).collect();
    assert_eq!(joined, source);
    assert_eq!(tokens[1].group(), TokenGroup::Unknown);
}

// ==================== PROPERTIES ====================

proptest! {
    /// Concatenating every lexeme reproduces the input byte-for-byte.
    ///
    /// Backslashes are excluded: an escape lexeme intentionally swallows
    /// the byte after its payload.
    #[test]
    fn prop_lossless_tokenization(source in "[a-zA-Z0-9 \t\n{}()\\[\\];:.,+*/=!&|<>'\"_@#%^?$-]{0,80}") {
        let tokens = tokenize(source.as_bytes());
        let joined: Vec<u8> = tokens.iter().flat_map(|t| t.lexeme().to_vec()).collect();
        prop_assert_eq!(joined, source.as_bytes());
    }

    /// Group and kind are pure functions of the lexeme.
    #[test]
    fn prop_classification_is_pure(source in "[a-zA-Z0-9 \t\n{}();:.,+=<>_-]{0,80}") {
        for token in tokenize(source.as_bytes()) {
            prop_assert_eq!(TokenGroup::of_byte(token.first_byte()), token.group());
            prop_assert_eq!(TokenKind::refine(token.group(), token.lexeme()), token.kind());
        }
    }

    /// Every lexeme is non-empty and starts with a byte of its group.
    #[test]
    fn prop_lexemes_nonempty(source in proptest::collection::vec(any::<u8>(), 0..64)) {
        // NUL ends input early by design, so keep it out of the buffer.
        let source: Vec<u8> = source.into_iter().filter(|&b| b != 0).collect();
        for token in tokenize(&source) {
            prop_assert!(!token.is_empty());
        }
    }
}
