//! Parse-time state threaded through the whole compile.

use std::collections::HashMap;

use cuel_bytecode::MAGIC;

use crate::tokens::TokenKind;

/// Current line number, previous token, the two symbol tables, and the
/// growing bytecode buffer — one field per item spec §3's "Parse
/// context" names.
pub struct ParseContext {
    pub ln: u32,
    pub prev: TokenKind,
    /// Function name → instruction address (offset into `bytecode`).
    pub fdefs: HashMap<String, u32>,
    /// Function name → list of (placeholder offset, call-site line).
    pub fcalls: HashMap<String, Vec<(usize, u32)>>,
    pub bytecode: Vec<u32>,
}

impl ParseContext {
    pub fn new() -> Self {
        ParseContext {
            ln: 1,
            prev: TokenKind::Begin,
            fdefs: HashMap::new(),
            fcalls: HashMap::new(),
            bytecode: vec![MAGIC],
        }
    }
}
