//! CUEL virtual machine library. `main.rs` is a thin CLI shell around
//! [`run_file`]; the fetch-decode-execute loop lives in [`vm`] so it
//! can be exercised directly from tests without spawning a process.

pub mod error;
pub mod vm;

use std::fs;

pub use error::VmError;

/// Errors loading or running a `.cuby` bytecode file end to end.
#[derive(Debug)]
pub enum RunError {
    Container(cuel_bytecode::ContainerError),
    Vm(VmError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Container(e) => write!(f, "{e}"),
            RunError::Vm(e) => write!(f, "{e}"),
        }
    }
}

impl From<cuel_bytecode::ContainerError> for RunError {
    fn from(e: cuel_bytecode::ContainerError) -> Self {
        RunError::Container(e)
    }
}

impl From<VmError> for RunError {
    fn from(e: VmError) -> Self {
        RunError::Vm(e)
    }
}

/// Read, validate, and execute a `.cuby` bytecode file against real
/// stdin/stdout.
pub fn run_file(path: &str) -> Result<(), RunError> {
    let data = fs::read(path).map_err(cuel_bytecode::ContainerError::Io)?;
    let words = cuel_bytecode::parse_container(&data)?;
    vm::run_stdio(&words)?;
    Ok(())
}
