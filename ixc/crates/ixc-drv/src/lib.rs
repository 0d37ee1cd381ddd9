//! ixc-drv - Driver for the Ix compiler.
//!
//! The driver owns everything around the language pipeline: command-line
//! parsing, filesystem preconditions, and the per-file orchestration of
//! reader, tokenizer, parser and generator. Precondition failures are the
//! only fatal errors; once a file enters the pipeline nothing stops it,
//! because the tokenizer and parser absorb malformed input by design.
//!
//! Per file the flow is:
//!
//! ```text
//! source.ix -> Reader -> Tokenizer -> Parser -> Ast -> Generator -> source.c
//! ```
//!
//! With `--dry-run` the flow stops after the parse, which is useful for
//! checking sources without touching the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};

use ixc_gen::{for_target, TargetLanguage};
use ixc_lex::{Reader, Tokenizer};
use ixc_par::Parser;
use ixc_util::Handler;

/// Command line accepted by the `ixc` binary.
#[derive(Debug, clap::Parser)]
#[command(name = "ixc", version, about = "Ix source-to-source compiler")]
pub struct Args {
    /// Directory receiving generated files; must exist and be writable.
    #[arg(long = "output-dir", value_name = "PATH")]
    pub output_dir: PathBuf,

    /// Output language. Currently only `C`.
    #[arg(long = "target-language", value_name = "NAME")]
    pub target_language: String,

    /// Parse the sources but do not run the generator.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Ix source files to compile.
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,
}

/// Checks every precondition, then compiles each source in order.
///
/// All preconditions are verified before the first file is touched, so a
/// bad argument never leaves a half-written output directory behind.
pub fn run(args: &Args) -> Result<()> {
    let target: TargetLanguage = args.target_language.parse()?;

    check_output_dir(&args.output_dir)?;
    for source in &args.sources {
        check_source(source)?;
    }

    for source in &args.sources {
        compile_file(source, target, &args.output_dir, args.dry_run)?;
    }

    Ok(())
}

/// Runs one source file through the pipeline.
///
/// Returns the path of the generated file, or `None` on a dry run.
pub fn compile_file(
    path: &Path,
    target: TargetLanguage,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Option<PathBuf>> {
    info!("compiling {}", path.display());

    let handler = Handler::new();
    let tokens = Tokenizer::with_handler(Reader::open(path), &handler);
    let ast = Parser::new(tokens).parse();
    debug!("{}: {} tokens in tree", path.display(), ast.tree().token_count());

    for diagnostic in handler.diagnostics() {
        warn!("{}: {}", path.display(), diagnostic);
    }

    if dry_run {
        info!("dry run, skipping generation for {}", path.display());
        return Ok(None);
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("out");
    let mut generator = for_target(target);
    let code = generator.generate(&ast, stem);

    let out_path = output_dir.join(generator.file_name(stem));
    fs::write(&out_path, code)
        .with_context(|| format!("cannot write {}", out_path.display()))?;
    info!("wrote {}", out_path.display());

    Ok(Some(out_path))
}

fn check_output_dir(dir: &Path) -> Result<()> {
    let meta = fs::metadata(dir)
        .with_context(|| format!("output directory {} does not exist", dir.display()))?;
    if !meta.is_dir() {
        bail!("output path {} is not a directory", dir.display());
    }
    if meta.permissions().readonly() {
        bail!("output directory {} is not writable", dir.display());
    }
    Ok(())
}

fn check_source(path: &Path) -> Result<()> {
    let meta = fs::metadata(path)
        .with_context(|| format!("source file {} does not exist", path.display()))?;
    if !meta.is_file() {
        bail!("source path {} is not a file", path.display());
    }
    fs::File::open(path)
        .with_context(|| format!("source file {} is not readable", path.display()))?;
    Ok(())
}
