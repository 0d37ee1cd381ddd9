//! Parser core and top-level dispatch.

use ixc_lex::{Token, TokenGroup, TokenKind, Tokenizer};

use crate::ast::Ast;
use crate::tree::Tree;

/// Recursive-descent parser over a token stream.
///
/// The parser owns the tokenizer and drains it completely; every token it
/// pulls is attached to the tree before any further dispatch, so the tree
/// is a lossless record of token order no matter how malformed the input.
///
/// # Example
///
/// ```
/// use ixc_lex::{Reader, Tokenizer};
/// use ixc_par::Parser;
///
/// let tokens = Tokenizer::new(Reader::from_str("public class extends Object {}\n"));
/// let ast = Parser::new(tokens).parse();
/// assert_eq!(ast.tree().token_count(), 11);
/// ```
pub struct Parser<'h> {
    tokens: Tokenizer<'h>,
}

impl<'h> Parser<'h> {
    /// Creates a parser that will drain `tokens`.
    pub fn new(tokens: Tokenizer<'h>) -> Self {
        Self { tokens }
    }

    /// Parses the whole token stream into an [`Ast`].
    pub fn parse(mut self) -> Ast {
        let mut tree = Tree::new();
        self.parse_root(&mut tree);
        Ast::new(tree)
    }

    /// Pulls the next token, if any.
    pub(crate) fn next_token(&mut self) -> Option<Token> {
        self.tokens.next_token()
    }

    /// Top level of a source file.
    ///
    /// Copyright and license markers open a one-liner statement, a
    /// modifier opens a declaration, and anything else stays a flat child
    /// of the root. One-liner contents are attached at the root itself, so
    /// a marker line reads as a flat run of siblings.
    fn parse_root(&mut self, tree: &mut Tree) {
        let root = tree.root();
        while let Some(token) = self.next_token() {
            let group = token.group();
            let kind = token.kind();
            tree.add_child(root, token);

            if group == TokenGroup::Alphanumeric {
                match kind {
                    TokenKind::Copyright | TokenKind::License => {
                        self.parse_statement(tree, root, true);
                    }
                    TokenKind::Modifier => {
                        let head = tree.last_child(root);
                        self.parse_complex(tree, head);
                    }
                    _ => {}
                }
            }
        }
    }
}
