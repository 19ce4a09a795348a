//! Semantic actions — one per [`Action`] variant, run once a line's
//! token has matched and passed its admissibility check.

use regex::Captures;

use crate::context::ParseContext;
use crate::error::{syntax, CompileError};
use crate::tokens::Action;

/// Decode `\\`, `\n`, `\r` escapes in a raw quoted string; any other
/// `\X` is left as the literal backslash followed by `X`.
fn decode_escapes(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' && i + 1 < chars.len() {
            let next = chars[i + 1];
            match next {
                '\\' => {
                    out.push('\\');
                    i += 2;
                    continue;
                }
                'n' => {
                    out.push('\n');
                    i += 2;
                    continue;
                }
                'r' => {
                    out.push('\r');
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

pub fn apply(
    ctx: &mut ParseContext,
    action: &Action,
    caps: Option<&Captures>,
) -> Result<(), CompileError> {
    match action {
        Action::Cdef(words) => {
            ctx.bytecode.extend_from_slice(words);
            Ok(())
        }
        Action::Cmain => {
            ctx.fdefs.insert("MAIN".to_string(), ctx.bytecode.len() as u32);
            Ok(())
        }
        Action::Cfunc => {
            let name = caps.unwrap().get(1).unwrap().as_str().to_string();
            if ctx.fdefs.contains_key(&name) {
                return syntax("function redefinition");
            }
            ctx.fdefs.insert(name, ctx.bytecode.len() as u32);
            Ok(())
        }
        Action::Ccalls(op) => {
            let name = caps.unwrap().get(1).unwrap().as_str().to_string();
            let offset = ctx.bytecode.len();
            ctx.fcalls.entry(name).or_default().push((offset, ctx.ln));
            ctx.bytecode.push(0x0000_0000);
            ctx.bytecode.push(op.as_word());
            Ok(())
        }
        Action::Cnum => {
            let raw = caps.unwrap().get(1).unwrap().as_str();
            let num: u64 = raw.parse().map_err(|_| CompileError::Syntax("number is out of range".to_string()))?;
            if num >= 1u64 << 31 {
                return syntax("number is out of range");
            }
            ctx.bytecode.push(num as u32);
            Ok(())
        }
        Action::Cstr => {
            let raw = caps.unwrap().get(1).unwrap().as_str();
            let decoded = decode_escapes(raw);
            ctx.bytecode.push(0x0000_0000);
            for c in decoded.chars().rev() {
                ctx.bytecode.push(c as u32);
            }
            Ok(())
        }
    }
}
