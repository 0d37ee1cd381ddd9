//! ixc-gen - Target code generation for the Ix compiler.
//!
//! Generators consume the parsed token tree through its public surface:
//! `ast.tree()`, walked in child order, interpreting tokens by their kind
//! tags. The tree is a lossless syntactic scaffold, so a generator sees
//! the whole source, comments and whitespace included, and decides for
//! itself what each shape means in the target language.
//!
//! The C backend is the first target; the [`TargetLanguage`] enum leaves
//! room for the languages planned after it.

pub mod c;
pub mod error;


use std::fmt;
use std::str::FromStr;

use ixc_par::Ast;

pub use c::CGenerator;
pub use error::GenError;

/// The output language of a generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetLanguage {
    /// C, the first supported target.
    C,
}

impl TargetLanguage {
    /// File extension for sources of this language, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            TargetLanguage::C => "c",
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = GenError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "C" | "c" => Ok(TargetLanguage::C),
            other => Err(GenError::UnsupportedTarget(other.to_string())),
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::C => write!(f, "C"),
        }
    }
}

/// A backend that renders an [`Ast`] into target-language text.
pub trait Generator {
    /// The language this generator emits.
    fn target(&self) -> TargetLanguage;

    /// Renders the tree into a complete output file's contents.
    fn generate(&mut self, ast: &Ast, module: &str) -> String;

    /// Output file name for a source file stem.
    fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.target().extension())
    }
}

/// Builds the generator for `target`.
pub fn for_target(target: TargetLanguage) -> Box<dyn Generator> {
    match target {
        TargetLanguage::C => Box::new(CGenerator::new()),
    }
}
