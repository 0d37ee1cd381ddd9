//! The C backend.
//!
//! The mapping from Ix constructs to C constructs is owned by the emitter
//! layer that sits behind this crate's interface; what the backend
//! guarantees here is the traversal contract. It walks the tree in child
//! order, renders every token in source order, and brackets the result
//! with a provenance banner, so the emitted file carries the complete
//! syntactic record the later mapping passes rewrite in place.

use ixc_par::Ast;

use crate::{Generator, TargetLanguage};

/// Generator for the C target.
#[derive(Debug, Default)]
pub struct CGenerator {
    out: String,
}

impl CGenerator {
    /// Creates a fresh generator.
    pub fn new() -> Self {
        Self::default()
    }

    fn banner(&mut self, module: &str) {
        self.out.push_str("/*\n");
        self.out
            .push_str(&format!(" *  Generated by ixc from {module}.ix\n"));
        self.out.push_str(" *  Do not edit; edit the Ix source.\n");
        self.out.push_str(" */\n\n");
    }
}

impl Generator for CGenerator {
    fn target(&self) -> TargetLanguage {
        TargetLanguage::C
    }

    fn generate(&mut self, ast: &Ast, module: &str) -> String {
        self.out.clear();
        self.banner(module);

        for token in ast.tree().tokens() {
            self.out.push_str(&token.lexeme_str());
        }

        if !self.out.ends_with('\n') {
            self.out.push('\n');
        }

        std::mem::take(&mut self.out)
    }
}
