//! The ordered token tree.
//!
//! All nodes of a tree live in one arena and refer to each other by
//! [`NodeId`]. The parent link is therefore a plain index, never an owning
//! reference, and dropping the tree releases every node and its token in
//! one stroke. Child order is insertion order and reflects source order.

use ixc_lex::Token;
use ixc_util::{define_idx, IndexVec};

define_idx!(
    /// Identifies a node within its [`Tree`]'s arena.
    NodeId
);

/// One node of the tree: at most one token plus ordered children.
///
/// The root node carries no token; every other node carries exactly one.
#[derive(Debug)]
pub struct Node {
    token: Option<Token>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// The token this node carries, if any.
    #[inline]
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// The node's parent. `None` only for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in insertion order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns true if the node has at least one child.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena-backed ordered tree of tokens.
///
/// # Example
///
/// ```
/// use ixc_lex::{Reader, Tokenizer};
/// use ixc_par::Tree;
///
/// let mut tokens = Tokenizer::new(Reader::from_str("a b"));
/// let mut tree = Tree::new();
/// let root = tree.root();
/// while let Some(token) = tokens.next_token() {
///     tree.add_child(root, token);
/// }
/// assert_eq!(tree.token_count(), 3);
/// ```
#[derive(Debug)]
pub struct Tree {
    nodes: IndexVec<NodeId, Node>,
    root: NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Creates a tree holding only the tokenless root.
    pub fn new() -> Self {
        let mut nodes = IndexVec::new();
        let root = nodes.push(Node {
            token: None,
            parent: None,
            children: Vec::new(),
        });
        Self { nodes, root }
    }

    /// The root node's id.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Wraps `token` in a new node appended to `parent`'s children.
    ///
    /// The token moves into the tree; the caller's handle is gone, which
    /// is the point: after attachment the tree is the only owner.
    pub fn add_child(&mut self, parent: NodeId, token: Token) -> NodeId {
        let id = self.nodes.push(Node {
            token: Some(token),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Borrows a node.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// The token carried by `id`, if any.
    #[inline]
    pub fn token(&self, id: NodeId) -> Option<&Token> {
        self.nodes[id].token()
    }

    /// Iterates `id`'s children in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id].children.iter().copied()
    }

    /// The most recently appended child of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` has no children. The parser only asks after it has
    /// attached a child.
    pub fn last_child(&self, id: NodeId) -> NodeId {
        *self.nodes[id]
            .children
            .last()
            .expect("node has no children")
    }

    /// Returns true if `id` has at least one child.
    #[inline]
    pub fn has_children(&self, id: NodeId) -> bool {
        self.nodes[id].has_children()
    }

    /// The parent of `id`, or `None` for the root.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent()
    }

    /// Total node count, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order walk over every token in the tree.
    ///
    /// Because children are stored in source order, the walk yields tokens
    /// exactly as the tokenizer produced them.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Number of tokens held by the tree (the root carries none).
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }
}

/// Iterator returned by [`Tree::tokens`].
pub struct Tokens<'t> {
    tree: &'t Tree,
    stack: Vec<NodeId>,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t Token;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = self.tree.node(id);
            for &child in node.children().iter().rev() {
                self.stack.push(child);
            }
            if let Some(token) = node.token() {
                return Some(token);
            }
        }
        None
    }
}
