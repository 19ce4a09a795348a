//! Call/return, conditional-call, and numeric/character I/O opcode
//! handlers.
//!
//! Each call-class handler returns whether it jumped (pushed a return
//! address and set `ip`) so the dispatch loop in [`super::run`] knows
//! whether to auto-advance `ip` by one afterward — see spec §4.6's
//! "Handler returns 'jumped?' flag".

use std::io::{BufRead, Write};

use crate::error::VmError;
use crate::vm::stack::CyclicStack;

pub(super) fn ret(cs: &mut CyclicStack, ip: &mut i64) -> Result<bool, VmError> {
    *ip = cs.pop()?;
    Ok(false)
}

pub(super) fn cal(cs: &mut CyclicStack, ds: &mut CyclicStack, ip: &mut i64) -> Result<bool, VmError> {
    let target = ds.pop()?;
    cs.push(*ip);
    *ip = target;
    Ok(true)
}

/// Shared body for `caz`/`cnz`/`cgz`/`clz`: pop target then condition,
/// branch-and-call iff `test(condition)` holds.
fn conditional_call(
    cs: &mut CyclicStack,
    ds: &mut CyclicStack,
    ip: &mut i64,
    test: impl Fn(i64) -> bool,
) -> Result<bool, VmError> {
    let target = ds.pop()?;
    let cond = ds.pop()?;
    if test(cond) {
        cs.push(*ip);
        *ip = target;
        Ok(true)
    } else {
        Ok(false)
    }
}

pub(super) fn caz(cs: &mut CyclicStack, ds: &mut CyclicStack, ip: &mut i64) -> Result<bool, VmError> {
    conditional_call(cs, ds, ip, |c| c == 0)
}

pub(super) fn cnz(cs: &mut CyclicStack, ds: &mut CyclicStack, ip: &mut i64) -> Result<bool, VmError> {
    conditional_call(cs, ds, ip, |c| c != 0)
}

pub(super) fn cgz(cs: &mut CyclicStack, ds: &mut CyclicStack, ip: &mut i64) -> Result<bool, VmError> {
    conditional_call(cs, ds, ip, |c| c > 0)
}

pub(super) fn clz(cs: &mut CyclicStack, ds: &mut CyclicStack, ip: &mut i64) -> Result<bool, VmError> {
    conditional_call(cs, ds, ip, |c| c < 0)
}

/// Read one line, parse it as a signed decimal integer, push it.
pub(super) fn getn<R: BufRead>(
    ds: &mut CyclicStack,
    mut stdin: R,
    word: u32,
    ip: u32,
) -> Result<(), VmError> {
    let mut line = String::new();
    let err = || VmError::InvalidInputValue { word, ip };
    let n = stdin.read_line(&mut line).map_err(|_| err())?;
    if n == 0 {
        return Err(err());
    }
    let value: i64 = line.trim().parse().map_err(|_| err())?;
    ds.push(value);
    Ok(())
}

/// Pop the top of the data stack, write its decimal form without a
/// trailing newline.
pub(super) fn putn<W: Write>(ds: &mut CyclicStack, mut stdout: W) -> Result<(), VmError> {
    let v = ds.pop()?;
    write!(stdout, "{v}").map_err(|e| VmError::Memory(e.to_string()))?;
    Ok(())
}

/// Pop and write Unicode code points until a zero sentinel is popped
/// (spec §4.3's `cstr` reverse-storage law).
pub(super) fn puts<W: Write>(
    ds: &mut CyclicStack,
    mut stdout: W,
    word: u32,
    ip: u32,
) -> Result<(), VmError> {
    let mut ichar = ds.pop()?;
    while ichar > 0 {
        let c = char::from_u32(ichar as u32)
            .ok_or(VmError::InvalidOutputValue { word, ip })?;
        write!(stdout, "{c}").map_err(|e| VmError::Memory(e.to_string()))?;
        ichar = ds.pop()?;
    }
    Ok(())
}
