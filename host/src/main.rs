use std::io::{self, Write};

use adder::{Addition, Operands};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "adder")]
#[command(about = "Add two integers and print the result")]
struct Args {
    /// First operand
    #[arg(default_value_t = 2, allow_negative_numbers = true)]
    a: i64,

    /// Second operand
    #[arg(default_value_t = 3, allow_negative_numbers = true)]
    b: i64,

    /// Print the inputs and result as JSON
    #[arg(long)]
    json: bool,
}

fn render(addition: &Addition, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(addition).context("failed to serialize result");
    }
    Ok(format!("Result: {}", addition.result))
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout only carries the result
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let addition = Addition::compute(Operands::new(args.a, args.b))?;
    info!(a = args.a, b = args.b, result = addition.result, "computed sum");

    let output = render(&addition, args.json)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("failed to write result")?;
    stdout.flush().context("failed to write result")?;

    Ok(())
}
