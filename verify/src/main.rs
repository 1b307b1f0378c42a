use std::fs;
use std::io::{self, Read, Write};

use adder::Addition;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "verify")]
#[command(about = "Verify an addition record printed by `adder --json`")]
struct Args {
    /// Path to the JSON record, read from stdin when omitted
    #[arg(short, long)]
    file: Option<String>,

    /// Expected result (optional, for validation)
    #[arg(short, long, allow_negative_numbers = true)]
    expected: Option<i64>,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn read_record(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let text = read_record(args.file.as_deref())?;
    debug!(bytes = text.len(), "read record");
    let addition: Addition = serde_json::from_str(&text).context("invalid addition record")?;

    addition.verify()?;
    if let Some(expected) = args.expected {
        addition.check_expected(expected)?;
    }

    let mut stdout = io::stdout().lock();
    if args.verbose {
        writeln!(stdout, "a: {}", addition.inputs.a).context("failed to write result")?;
        writeln!(stdout, "b: {}", addition.inputs.b).context("failed to write result")?;
        writeln!(stdout, "result: {}", addition.result).context("failed to write result")?;
    }
    writeln!(stdout, "✅ Record verified").context("failed to write result")?;
    stdout.flush().context("failed to write result")?;

    Ok(())
}
