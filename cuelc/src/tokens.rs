//! Declarative token table: one row per source-level construct, each
//! row a name, a line regex, the admissibility predicate over the
//! *previous* token, an error message, and a semantic action.
//!
//! The table is rebuilt once per compile by [`token_rules`] rather than
//! held behind a lazy static, since `regex::Regex::new` is cheap next
//! to the cost of the program it is about to lex and the toolchain
//! carries no lazy-init crate.

use cuel_bytecode::Opcode;
use regex::Regex;

/// Every distinct construct the lexer recognizes, used both as the
/// "previous token" marker and to select a semantic action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Begin,
    End,
    StringLit,
    NumberLit,
    Main,
    Func,
    NewLine,
    Cal,
    Caz,
    Cnz,
    Cgz,
    Clz,
    Swp,
    Swx,
    Rcw,
    Rcc,
    Pop,
    Dup,
    Neg,
    Add,
    Mul,
    Div,
    Sub,
    Mod,
    Getn,
    Putn,
    Puts,
}

/// A predecessor-type predicate: admissible iff `set.contains(prev) ==
/// inclusive` (polarity XOR membership must be true to admit).
pub struct Admissibility {
    pub inclusive: bool,
    pub set: &'static [TokenKind],
}

impl Admissibility {
    pub fn admits(&self, prev: TokenKind) -> bool {
        self.set.contains(&prev) == self.inclusive
    }
}

/// What a matched token does to the code generator. Plain opcodes and
/// `begin`'s sentinel carry their fixed word list directly (`Cdef`);
/// the rest need data from the match or from parse state.
pub enum Action {
    /// Append the fixed words verbatim.
    Cdef(&'static [u32]),
    /// Record `MAIN`'s definition address; emits nothing.
    Cmain,
    /// Record a named function's definition address (capture group 1).
    Cfunc,
    /// Record a call site for the named callee (capture group 1), then
    /// emit the placeholder + the given call-class opcode.
    Ccalls(Opcode),
    /// Parse the decimal literal in capture group 1 and emit it.
    Cnum,
    /// Decode escapes in the quoted contents (capture group 1) and
    /// emit the reversed code points behind a zero sentinel.
    Cstr,
}

pub struct TokenRule {
    pub kind: TokenKind,
    /// `None` for `begin`, which never matches a line (it is only ever
    /// the seed value of "previous token").
    pub pattern: Option<Regex>,
    pub admissible: Admissibility,
    pub err_msg: &'static str,
    pub action: Action,
}

const CHKL_MAIN: Admissibility = Admissibility { inclusive: true, set: &[TokenKind::Begin] };
const CHKL_FUNC: Admissibility = Admissibility { inclusive: true, set: &[TokenKind::NewLine] };
const CHKL_NLINE: Admissibility = Admissibility {
    inclusive: false,
    set: &[TokenKind::NewLine, TokenKind::Begin, TokenKind::Main, TokenKind::Func],
};
const CHKL_FCALL: Admissibility = Admissibility {
    inclusive: false,
    set: &[TokenKind::NewLine, TokenKind::Begin],
};

const ERR_MAIN: &str = "misplaced MAIN's definition";
const ERR_FUNC: &str = "missing an empty line before function definition";
const ERR_NLINE: &str = "misplaced empty line";
const ERR_FCALL: &str = "function call out of scope";
const ERR_END: &str = "unexpected end of file";

/// Build the ordered token table, scanned in this declaration order;
/// first matching pattern wins (spec §4.1/§4.2).
pub fn token_rules() -> Vec<TokenRule> {
    vec![
        TokenRule {
            kind: TokenKind::Begin,
            pattern: None,
            admissible: Admissibility { inclusive: true, set: &[] },
            err_msg: "",
            action: Action::Cdef(&[]),
        },
        TokenRule {
            kind: TokenKind::End,
            pattern: None,
            admissible: CHKL_NLINE,
            err_msg: ERR_END,
            action: Action::Cdef(&[0xFF00_0000]),
        },
        TokenRule {
            kind: TokenKind::StringLit,
            pattern: Some(Regex::new(r#"^ {8}"(.*)"\n$"#).unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cstr,
        },
        TokenRule {
            kind: TokenKind::NumberLit,
            pattern: Some(Regex::new(r"^ {8}([0-9]{1,10})\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cnum,
        },
        TokenRule {
            kind: TokenKind::Main,
            pattern: Some(Regex::new(r"^MAIN:\n$").unwrap()),
            admissible: CHKL_MAIN,
            err_msg: ERR_MAIN,
            action: Action::Cmain,
        },
        TokenRule {
            kind: TokenKind::Func,
            pattern: Some(Regex::new(r"^([A-Z](?:[A-Z0-9-]{0,45}[A-Z0-9])?):\n$").unwrap()),
            admissible: CHKL_FUNC,
            err_msg: ERR_FUNC,
            action: Action::Cfunc,
        },
        TokenRule {
            kind: TokenKind::NewLine,
            pattern: Some(Regex::new(r"^\n$").unwrap()),
            admissible: CHKL_NLINE,
            err_msg: ERR_NLINE,
            action: Action::Cdef(&[0xFF00_0000]),
        },
        TokenRule {
            kind: TokenKind::Cal,
            pattern: Some(Regex::new(r"^ {8}cal ([A-Z](?:[A-Z0-9-]*[A-Z0-9])*)\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Ccalls(Opcode::Cal),
        },
        TokenRule {
            kind: TokenKind::Caz,
            pattern: Some(Regex::new(r"^ {8}caz ([A-Z](?:[A-Z0-9-]*[A-Z0-9])*)\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Ccalls(Opcode::Caz),
        },
        TokenRule {
            kind: TokenKind::Cnz,
            pattern: Some(Regex::new(r"^ {8}cnz ([A-Z](?:[A-Z0-9-]*[A-Z0-9])*)\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Ccalls(Opcode::Cnz),
        },
        TokenRule {
            kind: TokenKind::Cgz,
            pattern: Some(Regex::new(r"^ {8}cgz ([A-Z](?:[A-Z0-9-]*[A-Z0-9])*)\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Ccalls(Opcode::Cgz),
        },
        TokenRule {
            kind: TokenKind::Clz,
            pattern: Some(Regex::new(r"^ {8}clz ([A-Z](?:[A-Z0-9-]*[A-Z0-9])*)\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Ccalls(Opcode::Clz),
        },
        TokenRule {
            kind: TokenKind::Swp,
            pattern: Some(Regex::new(r"^ {8}swp\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF900_0000]),
        },
        TokenRule {
            kind: TokenKind::Swx,
            pattern: Some(Regex::new(r"^ {8}swx\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF800_0000]),
        },
        TokenRule {
            kind: TokenKind::Rcw,
            pattern: Some(Regex::new(r"^ {8}rcw\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF700_0000]),
        },
        TokenRule {
            kind: TokenKind::Rcc,
            pattern: Some(Regex::new(r"^ {8}rcc\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF600_0000]),
        },
        TokenRule {
            kind: TokenKind::Pop,
            pattern: Some(Regex::new(r"^ {8}pop\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF500_0000]),
        },
        TokenRule {
            kind: TokenKind::Dup,
            pattern: Some(Regex::new(r"^ {8}dup\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF400_0000]),
        },
        TokenRule {
            kind: TokenKind::Neg,
            pattern: Some(Regex::new(r"^ {8}neg\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF300_0000]),
        },
        TokenRule {
            kind: TokenKind::Add,
            pattern: Some(Regex::new(r"^ {8}\+\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF200_0000]),
        },
        TokenRule {
            kind: TokenKind::Mul,
            pattern: Some(Regex::new(r"^ {8}\*\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF100_0000]),
        },
        TokenRule {
            kind: TokenKind::Div,
            pattern: Some(Regex::new(r"^ {8}/\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xF000_0000]),
        },
        TokenRule {
            kind: TokenKind::Sub,
            pattern: Some(Regex::new(r"^ {8}-\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xEF00_0000]),
        },
        TokenRule {
            kind: TokenKind::Mod,
            pattern: Some(Regex::new(r"^ {8}%\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xEE00_0000]),
        },
        TokenRule {
            kind: TokenKind::Getn,
            pattern: Some(Regex::new(r"^ {8}getn\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xED00_0000]),
        },
        TokenRule {
            kind: TokenKind::Putn,
            pattern: Some(Regex::new(r"^ {8}putn\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xEC00_0000]),
        },
        TokenRule {
            kind: TokenKind::Puts,
            pattern: Some(Regex::new(r"^ {8}puts\n$").unwrap()),
            admissible: CHKL_FCALL,
            err_msg: ERR_FCALL,
            action: Action::Cdef(&[0xEB00_0000]),
        },
    ]
}

/// Index of the `end` rule in [`token_rules`]'s output. Synthesized
/// once at EOF: the driving loop runs this rule's admissibility check
/// against the last real token seen, then its action, without ever
/// matching it against a line.
pub const END_INDEX: usize = 1;
