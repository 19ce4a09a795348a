//! Patch pass: resolves every recorded call site to its callee's
//! instruction address, plus the pre-patch unused-function check.

use crate::context::ParseContext;
use crate::error::{syntax, CompileError};

/// `unused = defined_names - {MAIN} - called_names`; fails if
/// non-empty. Run before patching, matching the original pipeline's
/// call order (`check_und` precedes `patch_btc` in `cuelpile`).
///
/// Names are reported in sorted order for reproducible diagnostics;
/// the original walks a Python `set` difference, whose iteration order
/// is not part of its contract either.
pub fn check_unused(ctx: &ParseContext) -> Result<(), CompileError> {
    let mut unused: Vec<&str> = ctx
        .fdefs
        .keys()
        .filter(|name| name.as_str() != "MAIN" && !ctx.fcalls.contains_key(name.as_str()))
        .map(|s| s.as_str())
        .collect();

    if unused.is_empty() {
        return Ok(());
    }
    unused.sort_unstable();
    syntax(format!("unused functions - {}", unused.join(", ")))
}

/// For each call-site list: fail "call to undefined function at line
/// L" (L = the *first* recorded call site's line) if the callee was
/// never defined; otherwise overwrite every placeholder with the
/// callee's address.
///
/// Names are visited in sorted order, matching `check_unused`'s fix
/// for reproducible diagnostics — `ctx.fcalls` is a `HashMap`, whose
/// iteration order is randomized per-process, so iterating it directly
/// would make the reported undefined-function name/line nondeterministic
/// across runs when more than one callee is undefined.
pub fn patch(ctx: &mut ParseContext) -> Result<(), CompileError> {
    let mut names: Vec<String> = ctx.fcalls.keys().cloned().collect();
    names.sort_unstable();

    for name in &names {
        let sites = &ctx.fcalls[name];
        match ctx.fdefs.get(name) {
            None => {
                let line = sites[0].1;
                return syntax(format!("call to undefined function at line {line}"));
            }
            Some(&addr) => {
                for (offset, _) in sites {
                    ctx.bytecode[*offset] = addr;
                }
            }
        }
    }
    Ok(())
}
