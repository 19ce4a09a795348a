//! VM-side errors.
//!
//! Mirrors `cuelc::CompileError`'s manual-`Display` style: the message
//! text is pinned exactly by spec §7's error table, so a derive macro
//! would only get in the way of it.

use std::fmt;

/// A fatal VM failure. Every variant is unrecoverable — execution stops
/// the moment one is produced (spec §7: no VM error kind is
/// recoverable).
#[derive(Debug, PartialEq, Eq)]
pub enum VmError {
    /// Stack underflow, IP out of bounds, or division/modulo by zero.
    Index(String),
    /// Host memory exhaustion.
    Memory(String),
    /// Dispatch saw a word in the opcode range with no matching handler.
    InvalidInstruction { word: u32, ip: u32 },
    /// `puts` popped a word that isn't a valid Unicode code point.
    InvalidOutputValue { word: u32, ip: u32 },
    /// `getn` read a line that doesn't parse as a signed decimal integer.
    InvalidInputValue { word: u32, ip: u32 },
    /// The call stack is non-empty after the dispatch loop exits —
    /// unbalanced `cal`/`ret`.
    Abnormal,
}

impl fmt::Display for VmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VmError::Index(msg) => write!(f, "Index error: {msg}"),
            VmError::Memory(msg) => write!(f, "Memory error: {msg}"),
            VmError::InvalidInstruction { word, ip } => {
                write!(f, "invalid instruction [BTC={word:#010X}, IP={ip:#010X}]")
            }
            VmError::InvalidOutputValue { word, ip } => {
                write!(f, "invalid output value [BTC={word:#010X}, IP={ip:#010X}]")
            }
            VmError::InvalidInputValue { word, ip } => {
                write!(f, "invalid input value [BTC={word:#010X}, IP={ip:#010X}]")
            }
            VmError::Abnormal => write!(f, "abnormal program termination"),
        }
    }
}

impl std::error::Error for VmError {}
