//! Edge case and tree-shape tests for the parser.

use ixc_lex::{Reader, TokenKind, Tokenizer};

use crate::ast::Ast;
use crate::parser::Parser;
use crate::tree::{NodeId, Tree};

fn parse(source: &str) -> Ast {
    Parser::new(Tokenizer::new(Reader::from_str(source))).parse()
}

fn lexeme(tree: &Tree, id: NodeId) -> String {
    tree.token(id)
        .map(|t| t.lexeme_str().into_owned())
        .unwrap_or_default()
}

fn child_lexemes(tree: &Tree, id: NodeId) -> Vec<String> {
    tree.children(id).map(|c| lexeme(tree, c)).collect()
}

/// Finds the direct child of `id` carrying `wanted` as its lexeme.
fn child_by_lexeme(tree: &Tree, id: NodeId, wanted: &str) -> NodeId {
    tree.children(id)
        .find(|&c| lexeme(tree, c) == wanted)
        .unwrap_or_else(|| panic!("no child {wanted:?}"))
}

// ==================== TREE SHAPES ====================

/// An empty class: the declaration nests under the modifier, the body
/// under the `class` keyword, and the closing brace under the opening one.
#[test]
fn test_shape_empty_class() {
    let ast = parse("public class extends Object {}\n");
    let tree = ast.tree();
    let root = tree.root();

    assert_eq!(child_lexemes(tree, root), vec!["public", "\n"]);

    let modifier = child_by_lexeme(tree, root, "public");
    assert_eq!(child_lexemes(tree, modifier), vec![" ", "class"]);

    let class = child_by_lexeme(tree, modifier, "class");
    assert_eq!(
        child_lexemes(tree, class),
        vec![" ", "extends", " ", "Object", " ", "{"]
    );

    let block = child_by_lexeme(tree, class, "{");
    assert_eq!(child_lexemes(tree, block), vec!["}"]);
}

/// A method: parameter list under `(`, body under `{`, both under the name.
#[test]
fn test_shape_simple_method() {
    let ast = parse("public new() {}\n");
    let tree = ast.tree();
    let root = tree.root();

    let modifier = child_by_lexeme(tree, root, "public");
    let method = child_by_lexeme(tree, modifier, "new");
    assert_eq!(child_lexemes(tree, method), vec!["(", " ", "{"]);

    let params = child_by_lexeme(tree, method, "(");
    assert_eq!(child_lexemes(tree, params), vec![")"]);

    let body = child_by_lexeme(tree, method, "{");
    assert_eq!(child_lexemes(tree, body), vec!["}"]);
}

/// Nested parentheses nest in the tree, one level per `(`.
#[test]
fn test_shape_nested_expression() {
    let ast = parse("public f((a)) {}\n");
    let tree = ast.tree();
    let root = tree.root();

    let method = child_by_lexeme(tree, child_by_lexeme(tree, root, "public"), "f");
    let outer = child_by_lexeme(tree, method, "(");
    assert_eq!(child_lexemes(tree, outer), vec!["(", ")"]);

    let inner = child_by_lexeme(tree, outer, "(");
    assert_eq!(child_lexemes(tree, inner), vec!["a", ")"]);
}

/// Parentheses with nothing around them stay flat at the root; the top
/// level only opens structure for marker words and modifiers.
#[test]
fn test_unstructured_parens_stay_flat() {
    let ast = parse("((a))");
    let tree = ast.tree();
    assert_eq!(
        child_lexemes(tree, tree.root()),
        vec!["(", "(", "a", ")", ")"]
    );
}

/// A statement's tokens become siblings under the statement head.
#[test]
fn test_shape_statement_in_block() {
    let ast = parse("public { x = 0xFF; }\n");
    let tree = ast.tree();
    let root = tree.root();

    let modifier = child_by_lexeme(tree, root, "public");
    let block = child_by_lexeme(tree, modifier, "{");
    let stmt = child_by_lexeme(tree, block, "x");
    assert_eq!(child_lexemes(tree, stmt), vec![" ", "=", " ", "0xFF", ";"]);

    let hex = child_by_lexeme(tree, stmt, "0xFF");
    assert_eq!(tree.token(hex).unwrap().kind(), TokenKind::Hex);
}

/// An `@` symbol in a block opens a one-liner statement.
#[test]
fn test_shape_annotation_one_liner() {
    let ast = parse("public { @x 1\n }\n");
    let tree = ast.tree();
    let root = tree.root();

    let block = child_by_lexeme(tree, child_by_lexeme(tree, root, "public"), "{");
    let annotation = child_by_lexeme(tree, block, "@");
    assert_eq!(child_lexemes(tree, annotation), vec!["x", " ", "1", "\n"]);

    // The block resumes after the annotation line and keeps its closer.
    assert_eq!(lexeme(tree, tree.last_child(block)), "}");
}

// ==================== EDGE CASES ====================

/// EDGE CASE: End of input inside a construct returns without error.
#[test]
fn test_edge_truncated_class() {
    let ast = parse("public class {");
    let tree = ast.tree();
    let class = child_by_lexeme(
        tree,
        child_by_lexeme(tree, tree.root(), "public"),
        "class",
    );
    let block = child_by_lexeme(tree, class, "{");
    assert!(!tree.has_children(block));
    assert_eq!(tree.token_count(), 5);
}

/// EDGE CASE: An unmatched closer ends the enclosing construct.
#[test]
fn test_edge_unmatched_closer() {
    let ast = parse("public } x");
    let tree = ast.tree();
    let root = tree.root();
    let modifier = child_by_lexeme(tree, root, "public");
    // The stray `}` lands under the modifier and ends the declaration;
    // what follows returns to the top level.
    assert_eq!(child_lexemes(tree, modifier), vec![" ", "}"]);
    assert_eq!(lexeme(tree, tree.last_child(root)), "x");
}

/// EDGE CASE: A bare block after a modifier.
#[test]
fn test_edge_modifier_block() {
    let ast = parse("public {}\n");
    let tree = ast.tree();
    let modifier = child_by_lexeme(tree, tree.root(), "public");
    let block = child_by_lexeme(tree, modifier, "{");
    assert_eq!(child_lexemes(tree, block), vec!["}"]);
}

// ==================== LAWS ====================

/// The pre-order walk of the tree replays tokens in source order.
#[test]
fn test_law_in_order_traversal_matches_source() {
    let sources = [
        "copyright 2021\n",
        "public class extends Object {}\n",
        "public new() { x = (1); }\n",
        "// hi\n",
        "public class {",
    ];
    for source in sources {
        let expected: Vec<String> = Tokenizer::new(Reader::from_str(source))
            .map(|t| t.lexeme_str().into_owned())
            .collect();
        let ast = parse(source);
        let walked: Vec<String> = ast
            .tree()
            .tokens()
            .map(|t| t.lexeme_str().into_owned())
            .collect();
        assert_eq!(walked, expected, "source {source:?}");
    }
}

/// The parse drops no tokens: tree count equals tokenizer count.
#[test]
fn test_law_no_tokens_dropped() {
    let sources = [
        "",
        "public class extends Object { public go() { return; } }\n",
        "copyright 2021\nlicense BSD\n\npublic class {}\n",
        "}}}((",
    ];
    for source in sources {
        let produced = Tokenizer::new(Reader::from_str(source)).count();
        let ast = parse(source);
        assert_eq!(ast.tree().token_count(), produced, "source {source:?}");
    }
}
