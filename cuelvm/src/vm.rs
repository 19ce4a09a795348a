//! Fetch–decode–execute loop over the two independent stacks.
//!
//! ## High-level model
//! - **Data stack**: operands for arithmetic, comparisons, and I/O.
//! - **Call stack**: return addresses plus the `-1` exit sentinel.
//! - **IP**: word index into the bytecode stream. Starts at 1 (word 0
//!   is the magic word, never executed).
//!
//! Dispatch classifies each fetched word (spec §3/§4.6): values below
//! `0x8000_0000` push as data, values in the opcode range invoke a
//! handler, everything else is a fatal "invalid instruction". A
//! handler reports whether it jumped; the loop only auto-advances `ip`
//! when it didn't (spec §4.6's "jumped?" flag).

use std::io::{BufRead, Write};

use cuel_bytecode::{classify, Opcode, Word, WordClass};

use crate::error::VmError;

mod ops_arith;
mod ops_control;
mod stack;

use stack::CyclicStack;

const CALL_STACK_ERR: &str = "call stack access out of bounds";
const DATA_STACK_ERR: &str = "data stack access out of bounds";

/// Execute a full bytecode word stream (magic word included) to
/// completion, reading `getn` input from `stdin` and writing `putn`/
/// `puts` output to `stdout`.
///
/// `Ok(())` on a clean exit (IP driven to `<= 0` by a top-level `ret`
/// with an empty call stack); `Err(VmError)` on any fatal condition.
pub fn run<R: BufRead, W: Write>(words: &[Word], stdin: R, stdout: W) -> Result<(), VmError> {
    let (_ds_len, cs_len) = execute(words, stdin, stdout)?;
    if cs_len > 0 {
        return Err(VmError::Abnormal);
    }
    Ok(())
}

/// Drives the dispatch loop to completion and returns the final data-
/// and call-stack sizes, so tests can assert spec §8's "data stack is
/// empty and call stack contains only the sentinel" property directly
/// instead of only observing the [`run`] wrapper's pass/fail verdict.
pub(crate) fn execute<R: BufRead, W: Write>(
    words: &[Word],
    mut stdin: R,
    mut stdout: W,
) -> Result<(usize, usize), VmError> {
    let mut ip: i64 = 1;
    let mut cs = CyclicStack::new(CALL_STACK_ERR);
    let mut ds = CyclicStack::new(DATA_STACK_ERR);
    cs.push(-1);

    while ip > 0 {
        if ip as usize >= words.len() {
            return Err(VmError::Index("IP out of bounds".to_string()));
        }
        let word = words[ip as usize];
        let mut jumped = false;

        match classify(word) {
            WordClass::Data(v) => {
                ds.push(v as i64);
            }
            WordClass::Op(op) => {
                jumped = dispatch(op, &mut cs, &mut ds, &mut ip, &mut stdin, &mut stdout, word, ip as u32)?;
            }
            WordClass::Invalid => {
                return Err(VmError::InvalidInstruction { word, ip: ip as u32 });
            }
        }

        if !jumped {
            ip += 1;
        }
    }

    Ok((ds.len(), cs.len()))
}

/// Run the bytecode against the process's real stdin/stdout.
pub fn run_stdio(words: &[Word]) -> Result<(), VmError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(words, stdin.lock(), stdout.lock())
}

#[allow(clippy::too_many_arguments)]
fn dispatch<R: BufRead, W: Write>(
    op: Opcode,
    cs: &mut CyclicStack,
    ds: &mut CyclicStack,
    ip: &mut i64,
    stdin: &mut R,
    stdout: &mut W,
    word: Word,
    ip_for_errs: u32,
) -> Result<bool, VmError> {
    match op {
        Opcode::Ret => ops_control::ret(cs, ip),
        Opcode::Cal => ops_control::cal(cs, ds, ip),
        Opcode::Caz => ops_control::caz(cs, ds, ip),
        Opcode::Cnz => ops_control::cnz(cs, ds, ip),
        Opcode::Cgz => ops_control::cgz(cs, ds, ip),
        Opcode::Clz => ops_control::clz(cs, ds, ip),
        Opcode::Swp => ops_arith::swp(ds).map(|_| false),
        Opcode::Swx => ops_arith::swx(ds).map(|_| false),
        Opcode::Rcw => ops_arith::rcw(ds).map(|_| false),
        Opcode::Rcc => ops_arith::rcc(ds).map(|_| false),
        Opcode::Pop => ops_arith::pop(ds).map(|_| false),
        Opcode::Dup => ops_arith::dup(ds).map(|_| false),
        Opcode::Neg => ops_arith::neg(ds).map(|_| false),
        Opcode::Add => ops_arith::add(ds).map(|_| false),
        Opcode::Mul => ops_arith::mul(ds).map(|_| false),
        Opcode::Div => ops_arith::div(ds).map(|_| false),
        Opcode::Sub => ops_arith::sub(ds).map(|_| false),
        Opcode::Mod => ops_arith::rem(ds).map(|_| false),
        Opcode::Getn => ops_control::getn(ds, stdin, word, ip_for_errs).map(|_| false),
        Opcode::Putn => ops_control::putn(ds, stdout).map(|_| false),
        Opcode::Puts => ops_control::puts(ds, stdout, word, ip_for_errs).map(|_| false),
    }
}

#[cfg(test)]
mod tests;
