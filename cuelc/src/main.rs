//! `cuelc` entry point.
//!
//! A thin CLI shell: validate arity, check the source file exists,
//! derive the output name, hand everything else to
//! [`cuelc::compile_to_file`]. All diagnostics are printed to stdout
//! (spec §6); the compiler itself never aborts the process on error.

use std::env;
use std::path::Path;

use regex::Regex;

/// Strip an optional directory prefix and the `.cuel` extension from a
/// source path, returning the bare basename. `None` if the path
/// doesn't end in `.cuel` at all.
fn derive_basename(src_path: &str) -> Option<String> {
    let re = Regex::new(r"^(?:.*/)?([^/]+)\.cuel$").unwrap();
    re.captures(src_path).map(|c| c[1].to_string())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("Usage: cuelc FILE");
        return;
    }

    let src_path = &args[1];
    if !Path::new(src_path).exists() {
        println!("Source file not found.");
        return;
    }

    let basename = match derive_basename(src_path) {
        Some(name) => name,
        None => {
            println!("Invalid source file name.");
            return;
        }
    };

    let dst_path = format!("{basename}.cuby");
    if let Err(e) = cuelc::compile_to_file(src_path, &dst_path) {
        println!("{e}");
    }
}
