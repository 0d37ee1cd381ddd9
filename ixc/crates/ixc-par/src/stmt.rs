//! Statements and blocks.

use ixc_lex::{TokenGroup, TokenKind};

use crate::parser::Parser;
use crate::tree::{NodeId, Tree};

impl Parser<'_> {
    /// Parses a statement's tokens onto `parent`.
    ///
    /// An ordinary statement runs to the `;` that ends it. A one-liner
    /// runs to the token whose kind is a newline instead; marker lines
    /// and annotations use that form. Parenthesized expressions nest
    /// under their `(`; a `{` turns the rest of the statement into a
    /// block and ends it.
    pub(crate) fn parse_statement(&mut self, tree: &mut Tree, parent: NodeId, one_liner: bool) {
        while let Some(token) = self.next_token() {
            let kind = token.kind();
            tree.add_child(parent, token);

            match kind {
                TokenKind::Stop => return,
                TokenKind::Newline if one_liner => return,
                TokenKind::StartExpression => {
                    let head = tree.last_child(parent);
                    self.parse_expression(tree, head);
                }
                TokenKind::StartBlock => {
                    let head = tree.last_child(parent);
                    self.parse_block(tree, head);
                    return;
                }
                _ => {}
            }
        }
    }

    /// Parses a block's contents onto `parent` until the matching `}`.
    ///
    /// An alphanumeric token opens a statement nested under itself. A
    /// plain symbol starting with `@` or `%` opens a one-liner statement,
    /// which is how annotation lines attach their arguments. The closing
    /// `}` is attached before the block returns, so it always appears as
    /// the block's last child.
    pub(crate) fn parse_block(&mut self, tree: &mut Tree, parent: NodeId) {
        while let Some(token) = self.next_token() {
            let group = token.group();
            let kind = token.kind();
            let first = token.first_byte();
            tree.add_child(parent, token);

            if kind == TokenKind::EndBlock {
                return;
            }

            if group == TokenGroup::Alphanumeric {
                let head = tree.last_child(parent);
                self.parse_statement(tree, head, false);
                continue;
            }

            if group == TokenGroup::Symbolic
                && kind == TokenKind::Symbol
                && matches!(first, b'@' | b'%')
            {
                let head = tree.last_child(parent);
                self.parse_statement(tree, head, true);
            }
        }
    }
}
