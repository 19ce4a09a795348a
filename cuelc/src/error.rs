//! Compiler-side errors.
//!
//! Mirrors the manual-`Display` error style used throughout the CUEL
//! toolchain: no derive-macro error crate, because the message text is
//! pinned exactly by the external interface contract and a derive
//! macro would only get in the way of that.

use std::fmt;
use std::io;

/// A single compile failure. `Syntax` carries the fully-formatted
/// message body (parser/lexer errors already have `" at line N"`
/// appended by the driving loop; linker errors format their own
/// message in full), so `Display` only ever needs to add the
/// `"Syntax error: "` prefix.
#[derive(Debug)]
pub enum CompileError {
    Syntax(String),
    Io(io::Error),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Syntax(msg) => write!(f, "Syntax error: {msg}"),
            CompileError::Io(e) => {
                let errno = e.raw_os_error().unwrap_or(0);
                write!(f, "I/O error({errno}): {e}")
            }
        }
    }
}

impl std::error::Error for CompileError {}

impl From<io::Error> for CompileError {
    fn from(e: io::Error) -> Self {
        CompileError::Io(e)
    }
}

/// Helper for raising a syntax error from inside a semantic action or
/// the admissibility check without constructing the enum by hand.
pub fn syntax<T>(msg: impl Into<String>) -> Result<T, CompileError> {
    Err(CompileError::Syntax(msg.into()))
}
