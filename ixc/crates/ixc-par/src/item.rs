//! Declarations: the constructs a modifier opens.
//!
//! A top-level modifier is followed by either a class, a method, or a bare
//! block, and the declaration nests under the modifier token. Which form
//! it is only becomes clear a few tokens in, so `parse_complex` scans
//! forward and hands off to the matching sub-parser at the first decisive
//! token.

use ixc_lex::TokenKind;

use crate::parser::Parser;
use crate::tree::{NodeId, Tree};

impl Parser<'_> {
    /// Parses whatever a modifier introduces.
    ///
    /// Runs until a decisive token appears: `class` opens a class body,
    /// a plain word is a method name, `{` is a bare block. A stray `}`
    /// ends the declaration. Tokens before the decision point (whitespace,
    /// primitives, further modifiers) stay flat children of `parent`.
    pub(crate) fn parse_complex(&mut self, tree: &mut Tree, parent: NodeId) {
        while let Some(token) = self.next_token() {
            let kind = token.kind();
            tree.add_child(parent, token);

            match kind {
                TokenKind::Class => {
                    let head = tree.last_child(parent);
                    self.parse_class(tree, head);
                    return;
                }
                TokenKind::Word => {
                    let head = tree.last_child(parent);
                    self.parse_method(tree, head);
                    return;
                }
                TokenKind::StartBlock => {
                    let head = tree.last_child(parent);
                    self.parse_block(tree, head);
                    return;
                }
                TokenKind::EndBlock => return,
                _ => {}
            }
        }
    }

    /// Parses a class declaration: everything up to its body's `{`, then
    /// the body, nested under the `class` token.
    pub(crate) fn parse_class(&mut self, tree: &mut Tree, parent: NodeId) {
        while let Some(token) = self.next_token() {
            let kind = token.kind();
            tree.add_child(parent, token);

            match kind {
                TokenKind::StartBlock => {
                    let head = tree.last_child(parent);
                    self.parse_block(tree, head);
                    return;
                }
                TokenKind::EndBlock => return,
                _ => {}
            }
        }
    }

    /// Parses a method declaration: parameter list expressions nest under
    /// their `(`, the body nests under its `{`, all under the name token.
    pub(crate) fn parse_method(&mut self, tree: &mut Tree, parent: NodeId) {
        while let Some(token) = self.next_token() {
            let kind = token.kind();
            tree.add_child(parent, token);

            match kind {
                TokenKind::StartExpression => {
                    let head = tree.last_child(parent);
                    self.parse_expression(tree, head);
                }
                TokenKind::StartBlock => {
                    let head = tree.last_child(parent);
                    self.parse_block(tree, head);
                    return;
                }
                TokenKind::EndBlock => return,
                _ => {}
            }
        }
    }
}
