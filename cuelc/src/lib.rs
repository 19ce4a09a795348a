//! CUEL compiler library: lexer/parser, code generator, and linker.
//! `main.rs` is a thin CLI shell around [`compile_source`] /
//! [`compile_to_file`]; everything that is actually the compiler lives
//! here so it can be exercised directly from tests.

pub mod codegen;
pub mod context;
pub mod error;
pub mod linker;
pub mod parser;
pub mod tokens;

use std::fs;

use cuel_bytecode::Word;
pub use error::CompileError;

use context::ParseContext;

/// Compile CUEL source text to a full bytecode word stream (the magic
/// word included). Runs the whole pipeline: parse line-by-line with
/// admissibility checks and semantic actions, synthesize and check the
/// EOF `end` token, reject unused functions, then patch every call
/// site to its callee's address.
pub fn compile_source(source: &str) -> Result<Vec<Word>, CompileError> {
    let mut ctx = ParseContext::new();
    parser::parse(&mut ctx, source)?;
    linker::check_unused(&ctx)?;
    linker::patch(&mut ctx)?;
    Ok(ctx.bytecode)
}

/// Read `src_path`, compile it, and write the resulting container to
/// `dst_path`.
pub fn compile_to_file(src_path: &str, dst_path: &str) -> Result<(), CompileError> {
    let source = fs::read_to_string(src_path)?;
    let words = compile_source(&source)?;
    let file = fs::File::create(dst_path)?;
    cuel_bytecode::write_words(file, &words)?;
    Ok(())
}
