/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! gen-atomicint - generates an atomic wrapper around an integer type.
//!
//! ```text
//! gen-atomicint --name Int32 --wrapped i32 --file int32.rs
//! gen-atomicint --name Uint64 --wrapped u64 --unsigned
//! gen-atomicint -name Uint64 -wrapped u64 -unsigned
//! ```
//!
//! The single-dash spellings `-name`, `-wrapped`, `-file` and `-unsigned` are
//! accepted as aliases of the long flags.
//!
//! The generated wrapper stores its value in the `std::sync::atomic` cell
//! named after the wrapped type (`i32` uses `AtomicI32`).

#![deny(clippy::unwrap_used)]

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use prism3_atomic_int::codegen::{self, Destination, GenerationRequest};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gen-atomicint")]
#[command(about = "Generate an atomic wrapper around an integer type")]
#[command(version)]
struct Args {
    /// Name of the generated type (e.g. Int32)
    #[arg(long, value_name = "IDENT")]
    name: Option<String>,

    /// Name of the wrapped type (e.g. i32)
    #[arg(long, value_name = "IDENT")]
    wrapped: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Whether the wrapped type is unsigned
    #[arg(long)]
    unsigned: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_request(self) -> GenerationRequest {
        let destination = match self.file {
            Some(path) if !path.as_os_str().is_empty() => Destination::File(path),
            _ => Destination::Stdout,
        };
        GenerationRequest::new(
            self.name.unwrap_or_default(),
            self.wrapped.unwrap_or_default(),
            self.unsigned,
        )
        .with_destination(destination)
    }
}

/// Flags that may also be spelled with a single dash.
const SINGLE_DASH_FLAGS: [&str; 4] = ["name", "wrapped", "file", "unsigned"];

/// Rewrites `-name`, `-name=X` and friends to their `--` form. clap would
/// otherwise read them as a cluster of short flags.
fn long_form(arg: &OsStr) -> Option<OsString> {
    let text = arg.to_str()?;
    let rest = text.strip_prefix('-')?;
    let flag = rest.split_once('=').map_or(rest, |(flag, _)| flag);
    SINGLE_DASH_FLAGS
        .contains(&flag)
        .then(|| OsString::from(format!("-{text}")))
}

fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut positional = false;
    for arg in args {
        if positional {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            positional = true;
        }
        normalized.push(long_form(&arg).unwrap_or(arg));
    }
    normalized
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("prism3_atomic_int={level}").into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse_from(normalize_flags(std::env::args_os()));
    init_logging(args.verbose);

    match codegen::run(&args.into_request()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gen-atomicint: {err}");
            ExitCode::FAILURE
        }
    }
}
