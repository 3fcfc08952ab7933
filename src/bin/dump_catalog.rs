use anyhow::{Context, Result};
use clap::Parser;
use dealshelf::parse_records;
use std::{fs, io::Write, path::PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Print parsed catalog records as JSON or normalized CSV")]
struct Args {
    /// Catalog CSV file
    input: PathBuf,
    /// Re-emit records as CSV instead of JSON
    #[arg(long)]
    csv: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let records = parse_records(&text);
    info!(records = records.len(), input = %args.input.display(), "parsed");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.csv {
        if let Some(first) = records.first() {
            writeln!(out, "{}", first.header_line())?;
        }
        for rec in &records {
            writeln!(out, "{}", rec.to_csv_line())?;
        }
    } else {
        serde_json::to_writer_pretty(&mut out, &records).context("serializing records")?;
        writeln!(out)?;
    }
    Ok(())
}
