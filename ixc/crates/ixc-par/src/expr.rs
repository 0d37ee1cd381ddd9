//! Parenthesized expressions.

use ixc_lex::TokenKind;

use crate::parser::Parser;
use crate::tree::{NodeId, Tree};

impl Parser<'_> {
    /// Parses an expression's tokens onto `parent` until the matching `)`.
    ///
    /// A nested `(` recurses, so parenthesis nesting is the one place the
    /// scaffold mirrors bracket depth exactly. The closing `)` is attached
    /// as the expression's last child before returning.
    pub(crate) fn parse_expression(&mut self, tree: &mut Tree, parent: NodeId) {
        while let Some(token) = self.next_token() {
            let kind = token.kind();
            tree.add_child(parent, token);

            match kind {
                TokenKind::EndExpression => return,
                TokenKind::StartExpression => {
                    let head = tree.last_child(parent);
                    self.parse_expression(tree, head);
                }
                _ => {}
            }
        }
    }
}
