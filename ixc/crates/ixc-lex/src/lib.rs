//! ixc-lex - Lexical analysis for the Ix language.
//!
//! The crate turns a byte stream into a stream of [`Token`]s in two
//! classification layers:
//!
//! 1. A token's **group** ([`TokenGroup`]) is fixed by the first byte of its
//!    lexeme: `{` opens a block group, a letter starts an alphanumeric
//!    lexeme, a digit starts a value, and so on. The group also decides
//!    which follow-up bytes belong to the same lexeme.
//! 2. A token's **kind** ([`TokenKind`]) refines the group once the full
//!    lexeme is known: `class` is a class keyword, `+=` is an assignment
//!    operator, `0xFF` is a hex literal.
//!
//! Tokenization is lossless: whitespace and comments become ordinary
//! tokens, and concatenating every lexeme reproduces the input. The
//! tokenizer never fails; bytes it cannot place are emitted as
//! unknown-group tokens and reported as warnings through the shared
//! diagnostic [`Handler`](ixc_util::Handler).
//!
//! Input is pulled through [`Reader`], a byte cursor with a one-byte
//! pushback. One byte of lookahead is all the group rules ever need.

pub mod group;
pub mod kind;
pub mod reader;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
mod edge_cases;

pub use group::TokenGroup;
pub use kind::TokenKind;
pub use reader::Reader;
pub use token::Token;
pub use tokenizer::Tokenizer;
