//! Line-at-a-time lexer/parser: matches each line against the token
//! table, checks predecessor admissibility, and runs the matched
//! token's semantic action.

use crate::codegen;
use crate::context::ParseContext;
use crate::error::{syntax, CompileError};
use crate::tokens::{token_rules, TokenRule, END_INDEX};

/// First matching pattern wins; fails "unknown token" if none match.
fn match_line<'a>(
    rules: &'a [TokenRule],
    line: &str,
) -> Result<(&'a TokenRule, Option<regex::Captures<'a>>), CompileError> {
    for rule in rules {
        if let Some(pattern) = &rule.pattern {
            if let Some(caps) = pattern.captures(line) {
                return Ok((rule, Some(caps)));
            }
        }
    }
    syntax("unknown token")
}

/// Admissible iff `polarity XOR membership` is true (spec §4.2).
fn check_admissible(rule: &TokenRule, prev: crate::tokens::TokenKind) -> Result<(), CompileError> {
    if rule.admissible.admits(prev) {
        Ok(())
    } else {
        syntax(rule.err_msg)
    }
}

/// Split source text the way Python's file iteration does: each line
/// keeps its trailing `\n` except a final partial line with none. This
/// matters because every token pattern requires a literal trailing
/// `\n` (spec §4.1) — a source file whose last body line lacks a
/// trailing newline must fail to match any token, exactly as
/// `original_source/cuelc.py`'s `for line in fi:` loop would hand that
/// last line to `parse_line` without a `\n` and see it raise "unknown
/// token". `str::lines()` strips every newline unconditionally and
/// would silently accept such files, so it can't be used here.
fn split_lines_with_terminators(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            lines.push(&source[start..=i]);
            start = i + 1;
        }
    }
    if start < source.len() {
        lines.push(&source[start..]);
    }
    lines
}

/// Parse the whole source text, line by line, then synthesize the
/// trailing `end` check. Any error raised while parsing a given line
/// gets `" at line N"` appended, matching the original's per-line
/// re-raise in `parse_src`.
pub fn parse(ctx: &mut ParseContext, source: &str) -> Result<(), CompileError> {
    let rules = token_rules();

    for line in split_lines_with_terminators(source) {
        parse_line(ctx, &rules, line).map_err(|e| attach_line(e, ctx.ln))?;
    }
    parse_end(ctx, &rules)
}

fn attach_line(err: CompileError, ln: u32) -> CompileError {
    match err {
        CompileError::Syntax(msg) => CompileError::Syntax(format!("{msg} at line {ln}")),
        other => other,
    }
}

fn parse_line(ctx: &mut ParseContext, rules: &[TokenRule], line: &str) -> Result<(), CompileError> {
    let (rule, caps) = match_line(rules, line)?;
    check_admissible(rule, ctx.prev)?;
    codegen::apply(ctx, &rule.action, caps.as_ref())?;

    ctx.prev = rule.kind;
    ctx.ln += 1;
    Ok(())
}

/// Synthesize the EOF `end` token: run its admissibility check against
/// whatever token was last seen, then its action (emit `0xFF000000`).
/// Unlike per-line errors, this is not re-raised with a line-number
/// suffix — the original's `parse_end` sits outside `parse_src`'s
/// per-line try/except, so its `SyntaxError` (only ever "unexpected
/// end of file") propagates with its bare message.
fn parse_end(ctx: &mut ParseContext, rules: &[TokenRule]) -> Result<(), CompileError> {
    let rule = &rules[END_INDEX];
    check_admissible(rule, ctx.prev)?;
    codegen::apply(ctx, &rule.action, None)
}
