//! `cuelvm` entry point.
//!
//! A thin CLI shell: validate arity, check the file exists, hand
//! everything else to [`cuelvm::run_file`]. Diagnostics print to
//! stdout with a leading blank line, matching
//! `original_source/cuelvm.py`'s `print "\n" + msg` convention — the
//! VM's own fetch-decode-execute output (`putn`/`puts`) never ends in
//! a newline, so the leading blank line visually separates it from the
//! error that follows.

use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("Usage: cuelvm FILE");
        return;
    }

    let path = &args[1];
    if !Path::new(path).exists() {
        println!("File not found.");
        return;
    }

    if let Err(e) = cuelvm::run_file(path) {
        println!("\n{e}");
    }
}
