//! Stack-manipulation and arithmetic opcode handlers.
//!
//! Division and modulo use floor semantics (round toward negative
//! infinity, result takes the divisor's sign) — see
//! `original_source/cuelvm.py`'s `ediv`/`emod`, which run under Python
//! 2 `/`/`%` on `int` operands. Recorded as the pinned choice for
//! spec §9's "division sign/rounding is unspecified" open question.

use crate::error::VmError;
use crate::vm::stack::CyclicStack;

pub(super) fn swp(ds: &mut CyclicStack) -> Result<(), VmError> {
    let op2 = ds.pop()?;
    let op1 = ds.pop()?;
    ds.push(op2);
    ds.push(op1);
    Ok(())
}

pub(super) fn swx(ds: &mut CyclicStack) -> Result<(), VmError> {
    let op3 = ds.pop()?;
    let op2 = ds.pop()?;
    let op1 = ds.pop()?;
    ds.push(op3);
    ds.push(op2);
    ds.push(op1);
    Ok(())
}

pub(super) fn pop(ds: &mut CyclicStack) -> Result<(), VmError> {
    ds.pop()?;
    Ok(())
}

pub(super) fn dup(ds: &mut CyclicStack) -> Result<(), VmError> {
    let v = ds.top()?;
    ds.push(v);
    Ok(())
}

pub(super) fn neg(ds: &mut CyclicStack) -> Result<(), VmError> {
    let v = ds.pop()?;
    ds.push(-v);
    Ok(())
}

pub(super) fn add(ds: &mut CyclicStack) -> Result<(), VmError> {
    let op2 = ds.pop()?;
    let op1 = ds.pop()?;
    ds.push(op1 + op2);
    Ok(())
}

pub(super) fn mul(ds: &mut CyclicStack) -> Result<(), VmError> {
    let op2 = ds.pop()?;
    let op1 = ds.pop()?;
    ds.push(op1 * op2);
    Ok(())
}

pub(super) fn sub(ds: &mut CyclicStack) -> Result<(), VmError> {
    let op2 = ds.pop()?;
    let op1 = ds.pop()?;
    ds.push(op1 - op2);
    Ok(())
}

/// Floor division: rounds toward negative infinity rather than zero.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if (r != 0) && ((r < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Floor modulo: result takes the divisor's sign.
fn floor_mod(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        r + b
    } else {
        r
    }
}

pub(super) fn div(ds: &mut CyclicStack) -> Result<(), VmError> {
    let op2 = ds.pop()?;
    let op1 = ds.pop()?;
    if op2 == 0 {
        return Err(VmError::Index("division by zero".to_string()));
    }
    ds.push(floor_div(op1, op2));
    Ok(())
}

pub(super) fn rem(ds: &mut CyclicStack) -> Result<(), VmError> {
    let op2 = ds.pop()?;
    let op1 = ds.pop()?;
    if op2 == 0 {
        return Err(VmError::Index("modulo by zero".to_string()));
    }
    ds.push(floor_mod(op1, op2));
    Ok(())
}

pub(super) fn rcw(ds: &mut CyclicStack) -> Result<(), VmError> {
    ds.rotate_cw()
}

pub(super) fn rcc(ds: &mut CyclicStack) -> Result<(), VmError> {
    ds.rotate_ccw()
}
