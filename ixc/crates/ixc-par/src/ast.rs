//! The parser's output and the generator's input.

use crate::tree::Tree;

/// Exclusive owner of a parsed token tree.
///
/// The parser builds the tree, wraps it here and hands the whole thing to
/// the target generator. Dropping the `Ast` drops the tree, its nodes and
/// their tokens; nothing else ever holds them.
#[derive(Debug, Default)]
pub struct Ast {
    tree: Tree,
}

impl Ast {
    /// Wraps a finished tree.
    pub fn new(tree: Tree) -> Self {
        Self { tree }
    }

    /// Borrows the tree for traversal.
    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Unwraps the tree, consuming the `Ast`.
    pub fn into_tree(self) -> Tree {
        self.tree
    }
}
