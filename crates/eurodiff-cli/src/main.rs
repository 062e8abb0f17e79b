//! `eurodiff <input> [output]`: run every case of a document.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use eurodiff_cli::run_document;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut it = std::env::args_os().skip(1);
    let Some(input) = it.next() else {
        bail!("usage: eurodiff <input> [output]");
    };
    let output = it.next().map(PathBuf::from);
    if it.next().is_some() {
        bail!("usage: eurodiff <input> [output]");
    }
    Ok(Args {
        input: PathBuf::from(input),
        output,
    })
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the reports.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;
    info!(input = %args.input.display(), "reading document");
    let document = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let rendered = run_document(&document)
        .with_context(|| format!("processing {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            info!(output = %path.display(), "reports written");
        }
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{rendered}").context("writing to stdout")?;
        }
    }
    Ok(())
}
