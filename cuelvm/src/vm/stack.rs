//! `CyclicStack` — a LIFO integer stack that also supports rotating an
//! end element to the opposite end, underflow-checked with a fixed
//! error message per instance.
//!
//! Named and shaped after `original_source/cuelvm.py`'s `CyclicStack`
//! class: both the call stack and the data stack are instances of this
//! same structure, differing only in the underflow message they carry
//! (spec §3: "Both stacks must support: push onto top, pop from top,
//! peek top, rotate-clockwise … rotate-counterclockwise … size.").

use crate::error::VmError;

pub struct CyclicStack {
    buf: Vec<i64>,
    err_msg: &'static str,
}

impl CyclicStack {
    pub fn new(err_msg: &'static str) -> Self {
        CyclicStack { buf: Vec::new(), err_msg }
    }

    pub fn push(&mut self, v: i64) {
        self.buf.push(v);
    }

    pub fn pop(&mut self) -> Result<i64, VmError> {
        self.buf.pop().ok_or_else(|| VmError::Index(self.err_msg.to_string()))
    }

    pub fn top(&mut self) -> Result<i64, VmError> {
        self.buf.last().copied().ok_or_else(|| VmError::Index(self.err_msg.to_string()))
    }

    /// Pop the top, reinsert it at the bottom.
    pub fn rotate_cw(&mut self) -> Result<(), VmError> {
        let top = self.pop()?;
        self.buf.insert(0, top);
        Ok(())
    }

    /// Pop the bottom, append it at the top.
    pub fn rotate_ccw(&mut self) -> Result<(), VmError> {
        if self.buf.is_empty() {
            return Err(VmError::Index(self.err_msg.to_string()));
        }
        let bottom = self.buf.remove(0);
        self.buf.push(bottom);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }
}
