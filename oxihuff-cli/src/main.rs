//! OxiHuff CLI - Huffman coding explorer
//!
//! Reads a line of text, builds its Huffman code once, and answers menu
//! queries about the code, the tree and the size savings.

mod config;
mod menu;
mod session;
mod utils;

use clap::Parser;
use config::SessionConfig;
use menu::MenuAction;
use oxihuff_core::{Analysis, CompressionStats, symbol_label};
use serde::Serialize;
use session::{Session, read_text};
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Huffman coding explorer")]
#[command(long_about = "
OxiHuff counts the symbols of a line of text, builds a Huffman tree from the
counts and shows the resulting codes and size savings.

Without options the text is read from stdin and an interactive menu follows:
  1. Reduce (Compress)          4. See the Original Bit Table
  2. See the Huffman Tree       5. See the New Bit Size
  3. See the Original Bit Size  6. See the New Bit Table
  0. Exit

Examples:
  oxihuff
  oxihuff --text 'abracadabra'
  oxihuff --text 'abracadabra' --action 2 --action 6
  oxihuff --text 'abracadabra' --json
")]
struct Cli {
    /// Text to analyse (read from stdin when omitted)
    #[arg(short, long)]
    text: Option<String>,

    /// Run menu action N and exit instead of showing the menu (repeatable)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=6))]
    action: Vec<u8>,

    /// Print statistics and codes as JSON and exit
    #[arg(long, conflicts_with = "action")]
    json: bool,

    /// Do not print the menu listing
    #[arg(short, long)]
    quiet: bool,

    /// Log filter (e.g. "debug", "oxihuff_core=trace")
    #[arg(long, default_value = "warn")]
    log: String,
}

/// Machine-readable summary of an analysis.
#[derive(Debug, Serialize)]
struct JsonReport {
    #[serde(flatten)]
    stats: CompressionStats,
    ratio: f64,
    space_savings: f64,
    average_code_length: f64,
    codes: BTreeMap<String, String>,
}

impl JsonReport {
    fn new(analysis: &Analysis) -> Self {
        let stats = analysis.stats();
        let codes = analysis
            .codes()
            .iter()
            .map(|(symbol, code)| (symbol.to_string(), code.to_string()))
            .collect();
        Self {
            stats,
            ratio: stats.ratio(),
            space_savings: stats.space_savings(),
            average_code_length: stats.average_code_length(),
            codes,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let scripted = cli.json || !cli.action.is_empty();
    let config = SessionConfig::from_flags(cli.quiet, scripted);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let text = match cli.text {
        Some(text) => text,
        None => read_text(&mut input, &mut out, &config)?,
    };
    tracing::info!(symbols = text.chars().count(), "analysing input");

    if cli.json {
        return cmd_json(&text, &mut out);
    }

    let session = Session::new(text);
    if cli.action.is_empty() {
        session.run(&mut input, &mut out, &config)?;
    } else {
        cmd_actions(&session, &cli.action, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// Run each requested action once.
fn cmd_actions<W: Write>(
    session: &Session,
    actions: &[u8],
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    for &number in actions {
        let action = MenuAction::from_choice(i64::from(number))
            .ok_or_else(|| format!("unknown menu action: {number}"))?;
        session.perform(action, out)?;
        if action == MenuAction::Exit {
            break;
        }
    }
    Ok(())
}

/// Print the analysis as a JSON object.
fn cmd_json<W: Write>(text: &str, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = Analysis::new(text)?;
    for (symbol, code) in analysis.codes().iter() {
        tracing::trace!(symbol = %symbol_label(symbol), code, "code assigned");
    }
    let report = JsonReport::new(&analysis);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_action_range() {
        assert!(Cli::try_parse_from(["oxihuff", "-a", "6"]).is_ok());
        assert!(Cli::try_parse_from(["oxihuff", "-a", "7"]).is_err());
        assert!(Cli::try_parse_from(["oxihuff", "--json", "-a", "1"]).is_err());
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        cmd_json("aaabb", &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["text_length"], 5);
        assert_eq!(value["distinct_symbols"], 2);
        assert_eq!(value["original_bits"], 40);
        assert_eq!(value["compressed_bits"], 5);
        assert_eq!(value["codes"]["a"], "1");
        assert_eq!(value["codes"]["b"], "0");
        assert_eq!(value["ratio"], 0.125);
        assert_eq!(value["space_savings"], 87.5);
        assert_eq!(value["average_code_length"], 1.0);
    }

    #[test]
    fn test_json_report_empty_input() {
        let err = cmd_json("", &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Empty input"));
    }

    #[test]
    fn test_actions_stop_at_exit() {
        let session = Session::new("aaabb");
        let mut out = Vec::new();
        cmd_actions(&session, &[3, 0, 5], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Original bit size: 40 bits\nExiting...\n"
        );
    }
}
