//! `json-patch` — apply a JSON Patch (RFC 6902) to a document.
//!
//! Usage:
//!   json-patch [--doc FILE] [--strict] [--max-depth N] [--pretty] '<patch-array-json>'
//!
//! The document is read from stdin unless `--doc` is given. Set `RUST_LOG`
//! (e.g. `RUST_LOG=rfc6902=debug`) to see per-operation logging on stderr.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use rfc6902::json_cli::{apply_json_patch, CliError, PatchArgs};

fn read_doc(args: &PatchArgs) -> Result<String, CliError> {
    match &args.doc {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(args: &PatchArgs) -> Result<(), CliError> {
    let doc = read_doc(args)?;
    let result = apply_json_patch(doc.trim(), &args.patch, &args.options(), args.pretty)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(result.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = PatchArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
