//! Direct-construction scenario tests: build a word vector by hand
//! (mirroring `runtime/src/vm/tests.rs`'s style), run it, assert on
//! the `Result` and captured output.

use std::io::Cursor;

use cuel_bytecode::{Opcode, MAGIC};

use super::*;

fn run_str(words: &[u32]) -> (Result<(), VmError>, String) {
    let stdin = Cursor::new(Vec::new());
    let mut out = Vec::new();
    let result = run(words, stdin, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn op(o: Opcode) -> u32 {
    o.as_word()
}

/// S1 — "Hi" printed via `puts`'s reverse-stored string convention.
#[test]
fn s1_hello_prints_hi() {
    let words = vec![MAGIC, 0, 0x69, 0x48, op(Opcode::Puts), op(Opcode::Ret)];
    let (result, out) = run_str(&words);
    assert_eq!(result, Ok(()));
    assert_eq!(out, "Hi");
}

/// S2 — `2 3 + putn` prints "5".
#[test]
fn s2_arithmetic_prints_sum() {
    let words = vec![MAGIC, 2, 3, op(Opcode::Add), op(Opcode::Putn), op(Opcode::Ret)];
    let (result, out) = run_str(&words);
    assert_eq!(result, Ok(()));
    assert_eq!(out, "5");
}

/// S3 — recursive countdown: `F` decrements to zero and returns;
/// `MAIN` calls `F(3)`. Clean exit leaves both stacks balanced.
#[test]
fn s3_recursion_balances_both_stacks() {
    const F_ADDR: u32 = 5;
    const R_ADDR: u32 = 10;
    let words = vec![
        MAGIC,
        3,
        F_ADDR,
        op(Opcode::Cal),
        op(Opcode::Ret),
        // F (addr 5): dup; cnz RNONZERO; pop; ret
        op(Opcode::Dup),
        R_ADDR,
        op(Opcode::Cnz),
        op(Opcode::Pop),
        op(Opcode::Ret),
        // RNONZERO (addr 10): push 1; sub; call F; push 0; ret
        1,
        op(Opcode::Sub),
        F_ADDR,
        op(Opcode::Cal),
        0,
        op(Opcode::Ret),
    ];
    let stdin = Cursor::new(Vec::new());
    let out = Vec::new();
    let (ds_len, cs_len) = execute(&words, stdin, out).unwrap();
    assert_eq!(ds_len, 0);
    assert_eq!(cs_len, 0);
}

/// S6 — division by zero is a fatal index error.
#[test]
fn s6_division_by_zero_is_index_error() {
    let words = vec![MAGIC, 1, 0, op(Opcode::Div), op(Opcode::Ret)];
    let (result, _) = run_str(&words);
    assert_eq!(result, Err(VmError::Index("division by zero".to_string())));
}

#[test]
fn unknown_opcode_word_is_invalid_instruction() {
    let words = vec![MAGIC, 0x9000_0000, op(Opcode::Ret)];
    let (result, _) = run_str(&words);
    assert_eq!(
        result,
        Err(VmError::InvalidInstruction { word: 0x9000_0000, ip: 1 })
    );
}

#[test]
fn ip_out_of_bounds_is_index_error() {
    // No trailing `ret`/`end` marker at all: ip walks off the buffer.
    let words = vec![MAGIC, 1];
    let (result, _) = run_str(&words);
    assert_eq!(result, Err(VmError::Index("IP out of bounds".to_string())));
}

#[test]
fn data_stack_underflow_is_index_error() {
    let words = vec![MAGIC, op(Opcode::Add), op(Opcode::Ret)];
    let (result, _) = run_str(&words);
    assert_eq!(
        result,
        Err(VmError::Index("data stack access out of bounds".to_string()))
    );
}

#[test]
fn unbalanced_call_stack_is_abnormal_termination() {
    // Compute -1 at runtime (0 - 1) and `cal` straight to it: ip goes
    // <= 0 immediately, ending the loop while the sentinel and this
    // call's own pushed return address are both still on the call
    // stack.
    let words = vec![MAGIC, 0, 1, op(Opcode::Sub), op(Opcode::Cal)];
    let (result, _) = run_str(&words);
    assert_eq!(result, Err(VmError::Abnormal));
}

#[test]
fn swx_rotates_three_deep() {
    // a b c --(swx)--> c b a ; verified via putn order (top popped first).
    let words = vec![
        MAGIC, 1, 2, 3, op(Opcode::Swx), op(Opcode::Putn), op(Opcode::Putn), op(Opcode::Putn), op(Opcode::Ret),
    ];
    let (result, out) = run_str(&words);
    assert_eq!(result, Ok(()));
    // after swx: bottom..top = 3,2,1 ; three putn pops give 1,2,3
    assert_eq!(out, "123");
}

#[test]
fn rotate_clockwise_moves_top_to_bottom() {
    // push 1,2,3 ; rcw moves 3 (top) to the bottom -> bottom..top = 3,1,2
    let words = vec![
        MAGIC, 1, 2, 3, op(Opcode::Rcw), op(Opcode::Putn), op(Opcode::Putn), op(Opcode::Putn), op(Opcode::Ret),
    ];
    let (result, out) = run_str(&words);
    assert_eq!(result, Ok(()));
    assert_eq!(out, "213");
}

#[test]
fn rotate_counterclockwise_moves_bottom_to_top() {
    // push 1,2,3 ; rcc moves 1 (bottom) to the top -> bottom..top = 2,3,1
    let words = vec![
        MAGIC, 1, 2, 3, op(Opcode::Rcc), op(Opcode::Putn), op(Opcode::Putn), op(Opcode::Putn), op(Opcode::Ret),
    ];
    let (result, out) = run_str(&words);
    assert_eq!(result, Ok(()));
    assert_eq!(out, "132");
}

#[test]
fn floor_division_rounds_toward_negative_infinity() {
    // -7 / 2 floors to -4 (not -3, which truncation toward zero gives).
    let words = vec![MAGIC, 0, 7, op(Opcode::Sub), 2, op(Opcode::Div), op(Opcode::Putn), op(Opcode::Ret)];
    let (result, out) = run_str(&words);
    assert_eq!(result, Ok(()));
    assert_eq!(out, "-4");
}

#[test]
fn floor_modulo_takes_the_divisor_sign() {
    // -7 % 2 is 1 under floor semantics (Python's `%`), not -1.
    let words = vec![MAGIC, 0, 7, op(Opcode::Sub), 2, op(Opcode::Mod), op(Opcode::Putn), op(Opcode::Ret)];
    let (result, out) = run_str(&words);
    assert_eq!(result, Ok(()));
    assert_eq!(out, "1");
}

#[test]
fn getn_reads_a_decimal_line() {
    let words = vec![MAGIC, op(Opcode::Getn), op(Opcode::Putn), op(Opcode::Ret)];
    let stdin = Cursor::new(b"42\n".to_vec());
    let mut out = Vec::new();
    let result = run(&words, stdin, &mut out);
    assert_eq!(result, Ok(()));
    assert_eq!(String::from_utf8(out).unwrap(), "42");
}

#[test]
fn getn_rejects_unparseable_input() {
    let words = vec![MAGIC, op(Opcode::Getn), op(Opcode::Ret)];
    let stdin = Cursor::new(b"not-a-number\n".to_vec());
    let mut out = Vec::new();
    let result = run(&words, stdin, &mut out);
    assert_eq!(
        result,
        Err(VmError::InvalidInputValue { word: op(Opcode::Getn), ip: 1 })
    );
}

#[test]
fn dup_and_neg_compose() {
    let words = vec![MAGIC, 5, op(Opcode::Neg), op(Opcode::Dup), op(Opcode::Add), op(Opcode::Putn), op(Opcode::Ret)];
    let (result, out) = run_str(&words);
    assert_eq!(result, Ok(()));
    assert_eq!(out, "-10");
}
