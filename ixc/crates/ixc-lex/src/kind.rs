//! Fine-grained token classification.
//!
//! Once the tokenizer has a complete lexeme, [`TokenKind::refine`] maps the
//! `(group, lexeme)` pair to a kind. The mapping is pure: it looks only at
//! the lexeme bytes, so reclassifying any token always reproduces its kind.
//! Keyword recognition goes through a fixed, ordered table rather than a
//! match cascade.

use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use rustc_hash::FxHasher;

use crate::group::TokenGroup;

/// The refined class of a token within its group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Whitespace group.
    /// A run of whitespace starting with a plain space.
    Space,
    /// A run of whitespace starting with a tab.
    Tab,
    /// A run of whitespace starting with a newline.
    Newline,
    /// Whitespace starting with one of the rarer control bytes.
    UnknownWhitespace,

    // Open group.
    /// `{`
    StartBlock,
    /// `(`
    StartExpression,
    /// `[`
    StartSubscript,
    /// `<`
    StartTag,

    // Close group.
    /// `}`
    EndBlock,
    /// `)`
    EndExpression,
    /// `]`
    EndSubscript,
    /// `>`
    EndTag,

    // Symbolic group.
    /// Punctuation with no operator role, e.g. `@`, `#`, `,`.
    Symbol,
    /// `:`
    Operator,
    /// An operator written before its operand, e.g. `!`.
    PrefixOp,
    /// A binary operator, e.g. `+`, `==`, `&&`.
    InfixOp,
    /// An operator written after its operand.
    PostfixOp,
    /// An operator usable in prefix or infix position.
    PreInfixOp,
    /// An operator usable in prefix or postfix position: `++`, `--`.
    PrePostfixOp,
    /// `=` and the compound assignments such as `+=`.
    AssignmentOp,
    /// `;`
    Stop,
    /// `//`
    LineComment,
    /// `/*`
    Comment,

    // Alphanumeric group.
    /// An identifier that is not a recognized keyword.
    Word,
    /// The `copyright` marker word.
    Copyright,
    /// The `license` marker word (either spelling).
    License,
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `enum`
    Enum,
    /// `include`
    Include,
    /// `package`
    Package,
    /// An access modifier: `public`, `protected`, `private`.
    Modifier,
    /// A built-in type name such as `int` or `string`.
    Primitive,
    /// Any other reserved word, e.g. `return`, `extends`, `for`.
    Keyword,

    // Value groups.
    /// An integer literal.
    Integer,
    /// The general numeric tag; also carried by quoted literals.
    Float,
    /// A hex literal such as `0xFF`.
    Hex,
    /// A numeric literal of unspecified shape.
    Number,

    // Remaining groups.
    /// A backslash escape lexeme.
    Escape,
    /// A lexeme of bytes no class claims.
    Unknown,
}

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Reserved words, in the order they are documented for the language.
static KEYWORDS: Lazy<FxIndexMap<&'static str, TokenKind>> = Lazy::new(|| {
    let entries: &[(&str, TokenKind)] = &[
        ("copyright", TokenKind::Copyright),
        ("Copyright", TokenKind::Copyright),
        ("license", TokenKind::License),
        ("License", TokenKind::License),
        ("licence", TokenKind::License),
        ("Licence", TokenKind::License),
        ("class", TokenKind::Class),
        ("include", TokenKind::Include),
        ("interface", TokenKind::Interface),
        ("package", TokenKind::Package),
        ("public", TokenKind::Modifier),
        ("protected", TokenKind::Modifier),
        ("private", TokenKind::Modifier),
        ("bool", TokenKind::Primitive),
        ("boolean", TokenKind::Primitive),
        ("byte", TokenKind::Primitive),
        ("char", TokenKind::Primitive),
        ("const", TokenKind::Primitive),
        ("double", TokenKind::Primitive),
        ("float", TokenKind::Primitive),
        ("int", TokenKind::Primitive),
        ("integer", TokenKind::Primitive),
        ("long", TokenKind::Primitive),
        ("short", TokenKind::Primitive),
        ("signed", TokenKind::Primitive),
        ("string", TokenKind::Primitive),
        ("unsigned", TokenKind::Primitive),
        ("void", TokenKind::Primitive),
        ("break", TokenKind::Keyword),
        ("case", TokenKind::Keyword),
        ("catch", TokenKind::Keyword),
        ("default", TokenKind::Keyword),
        ("extends", TokenKind::Keyword),
        ("implements", TokenKind::Keyword),
        ("for", TokenKind::Keyword),
        ("foreach", TokenKind::Keyword),
        ("let", TokenKind::Keyword),
        ("namespace", TokenKind::Keyword),
        ("return", TokenKind::Keyword),
        ("switch", TokenKind::Keyword),
        ("try", TokenKind::Keyword),
        ("var", TokenKind::Keyword),
    ];
    let mut map = FxIndexMap::with_capacity_and_hasher(entries.len(), Default::default());
    for &(word, kind) in entries {
        map.insert(word, kind);
    }
    map
});

impl TokenKind {
    /// Refines a complete lexeme to its kind within `group`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ixc_lex::{TokenGroup, TokenKind};
    ///
    /// let kind = TokenKind::refine(TokenGroup::Alphanumeric, b"class");
    /// assert_eq!(kind, TokenKind::Class);
    ///
    /// let kind = TokenKind::refine(TokenGroup::Value, b"0xFF");
    /// assert_eq!(kind, TokenKind::Hex);
    /// ```
    pub fn refine(group: TokenGroup, lexeme: &[u8]) -> TokenKind {
        let first = lexeme.first().copied().unwrap_or(0);
        match group {
            TokenGroup::Whitespace => match first {
                b' ' => TokenKind::Space,
                b'\t' => TokenKind::Tab,
                b'\n' => TokenKind::Newline,
                _ => TokenKind::UnknownWhitespace,
            },
            TokenGroup::Open => match first {
                b'{' => TokenKind::StartBlock,
                b'(' => TokenKind::StartExpression,
                b'[' => TokenKind::StartSubscript,
                _ => TokenKind::StartTag,
            },
            TokenGroup::Close => match first {
                b'}' => TokenKind::EndBlock,
                b')' => TokenKind::EndExpression,
                b']' => TokenKind::EndSubscript,
                _ => TokenKind::EndTag,
            },
            TokenGroup::Symbolic => Self::refine_symbolic(lexeme),
            TokenGroup::Alphanumeric => std::str::from_utf8(lexeme)
                .ok()
                .and_then(|word| KEYWORDS.get(word).copied())
                .unwrap_or(TokenKind::Word),
            // String and char literals deliberately share the numeric tag;
            // consumers key off the group for quoted lexemes.
            TokenGroup::String | TokenGroup::Char => TokenKind::Float,
            TokenGroup::Value => {
                if lexeme.contains(&b'x') {
                    TokenKind::Hex
                } else {
                    TokenKind::Float
                }
            }
            TokenGroup::HexValue => TokenKind::Hex,
            TokenGroup::Escape => TokenKind::Escape,
            TokenGroup::Unknown => TokenKind::Unknown,
        }
    }

    /// Classifies a symbolic lexeme from its first byte and, where it
    /// matters, its second.
    fn refine_symbolic(lexeme: &[u8]) -> TokenKind {
        let first = lexeme.first().copied().unwrap_or(0);
        let second = lexeme.get(1).copied();
        match first {
            b'!' => match second {
                Some(b'=') => TokenKind::InfixOp,
                _ => TokenKind::PrefixOp,
            },
            b'%' | b'^' => match second {
                Some(b'=') => TokenKind::AssignmentOp,
                _ => TokenKind::InfixOp,
            },
            b'&' => match second {
                Some(b'&') => TokenKind::InfixOp,
                Some(b'=') => TokenKind::AssignmentOp,
                _ => TokenKind::InfixOp,
            },
            b'*' => match second {
                Some(b'=') => TokenKind::AssignmentOp,
                _ => TokenKind::InfixOp,
            },
            b'-' => match second {
                Some(b'-') => TokenKind::PrePostfixOp,
                Some(b'=') => TokenKind::AssignmentOp,
                _ => TokenKind::InfixOp,
            },
            b'+' => match second {
                Some(b'+') => TokenKind::PrePostfixOp,
                Some(b'=') => TokenKind::AssignmentOp,
                _ => TokenKind::InfixOp,
            },
            b'=' => match second {
                Some(b'=') => TokenKind::InfixOp,
                _ => TokenKind::AssignmentOp,
            },
            b'/' => match second {
                Some(b'/') => TokenKind::LineComment,
                Some(b'*') => TokenKind::Comment,
                Some(b'=') => TokenKind::AssignmentOp,
                _ => TokenKind::InfixOp,
            },
            b':' => TokenKind::Operator,
            b';' => TokenKind::Stop,
            // Angle brackets tokenize as Open/Close; these rows cover the
            // pure (group, lexeme) mapping for completeness.
            b'<' | b'>' => TokenKind::InfixOp,
            b'@' | b'#' | b'$' => TokenKind::Symbol,
            0x1b => TokenKind::Symbol,
            _ => TokenKind::Symbol,
        }
    }
}
