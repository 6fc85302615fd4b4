use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sbe_tools::{
    decode_message_json, format_decode_pretty, inspect_message, parse_hex, DecodeOptions,
    InspectReport,
};
use spot_schema::SCHEMA;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sbe-tools",
    version,
    about = "sbe message inspection and decoding tools"
)]
struct Cli {
    /// Emit codec debug events (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize the header of each capture.
    Inspect {
        /// Capture files or glob patterns such as `captures/*.bin`.
        #[arg(required = true)]
        captures: Vec<String>,
        /// Captures hold hex text instead of raw bytes.
        #[arg(long)]
        hex: bool,
    },
    /// Decode a message into structured JSON.
    Decode {
        /// Path to the message bytes.
        message_file: PathBuf,
        /// Input file holds hex text instead of raw bytes.
        #[arg(long)]
        hex: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
        /// Validate every field against its declared range.
        #[arg(long)]
        range_check: bool,
        /// Leave framed messages inside var data as hex.
        #[arg(long)]
        no_nested: bool,
        /// Include the positional decoded block in JSON output.
        #[arg(long)]
        raw: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Inspect { captures, hex } => {
            let paths = expand_captures(&captures)?;
            let many = paths.len() > 1;
            for path in paths {
                let bytes = read_message(&path, hex)?;
                if many {
                    println!("== {} ==", path.display());
                }
                match inspect_message(&bytes, &SCHEMA) {
                    Ok(report) => print_inspect_report(&report),
                    Err(err) if many => println!("error: {err:#}"),
                    Err(err) => return Err(err),
                }
            }
        }
        Command::Decode {
            message_file,
            hex,
            format,
            range_check,
            no_nested,
            raw,
        } => {
            let bytes = read_message(&message_file, hex)?;
            let options = DecodeOptions {
                range_check,
                nested: !no_nested,
                raw,
                ..DecodeOptions::default()
            };
            let output = decode_message_json(&bytes, &SCHEMA, &options)?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&output));
                }
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Expands each argument as a glob pattern. An argument matching nothing is
/// kept as a literal path so a missing file reports a read error.
fn expand_captures(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for arg in args {
        let before = paths.len();
        for entry in glob::glob(arg).with_context(|| format!("invalid pattern {arg}"))? {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            }
        }
        if paths.len() == before {
            paths.push(PathBuf::from(arg));
        }
    }
    debug!(count = paths.len(), "expanded captures");
    Ok(paths)
}

fn read_message(path: &Path, hex: bool) -> Result<Vec<u8>> {
    let bytes = if hex {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read message {}", path.display()))?;
        parse_hex(&text).with_context(|| format!("parse hex {}", path.display()))?
    } else {
        fs::read(path).with_context(|| format!("read message {}", path.display()))?
    };
    debug!(path = %path.display(), len = bytes.len(), "read capture");
    Ok(bytes)
}

fn print_inspect_report(report: &InspectReport) {
    let header = report.header;
    println!(
        "schema: {} version: {} template: {} ({})",
        header.schema_id,
        header.version,
        header.template_id,
        report.message.unwrap_or("unknown")
    );
    match report.schema_block_length {
        Some(own) if report.block_length_differs() => println!(
            "block length: {} on wire, {own} in schema v{}",
            header.block_length, SCHEMA.version
        ),
        _ => println!("block length: {}", header.block_length),
    }
    if header.version > SCHEMA.version {
        println!("producer is newer than schema v{}", SCHEMA.version);
    }
    println!(
        "size: {} bytes ({} body)",
        report.total_len,
        report.body_len()
    );
}
