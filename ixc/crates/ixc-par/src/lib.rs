//! ixc-par - Syntactic analysis for the Ix language.
//!
//! The parser performs a recursive descent over the token stream and
//! records **every** token, whitespace and comments included, as a node of
//! an ordered tree. The result is a syntactic scaffold rather than a
//! conventional abstract syntax tree: no token is interpreted, dropped or
//! reordered, and an in-order walk of the tree replays the source exactly.
//! Deciding what the shapes mean is the target generator's job.
//!
//! Structure comes from where tokens are attached. A modifier at the top
//! level opens a declaration; a `class` keyword or a method name nests
//! what follows under itself; brackets nest their contents under the
//! opening token, with the matching closer attached as its last child.
//! Malformed input never fails the parse: an unmatched closer ends the
//! enclosing construct and end of input simply returns.

pub mod ast;
pub mod tree;

mod expr;
mod item;
mod parser;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::Ast;
pub use parser::Parser;
pub use tree::{Node, NodeId, Tree};
