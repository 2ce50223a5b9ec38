//! CLI tool for turning a block-delimited context file into a slide deck.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{parse, DeckBackend, DeckGenerator, StyleConfig};
use deck_pptx::PptxDeck;
use std::path::{Path, PathBuf};

/// Build a PowerPoint deck from a context file.
#[derive(Parser, Debug)]
#[command(name = "make-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root directory for the input, the output and image lookups
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Context file, relative to the root
    #[arg(short, long, default_value = "context.md")]
    input: PathBuf,

    /// Output deck, relative to the root
    #[arg(short, long, default_value = "output.pptx")]
    output: PathBuf,

    /// JSON file overriding fonts and fallback text box positions
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Print the per-slide placement report as JSON
    #[arg(long)]
    report: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let input_path = args.root.join(&args.input);
    if !input_path.is_file() {
        println!("{} not found; nothing to generate.", input_path.display());
        return Ok(());
    }

    let text = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;
    let document = parse(&text);
    log::debug!("Parsed {} block(s) from {}", document.len(), input_path.display());

    let mut generator = DeckGenerator::new(&args.root);
    if let Some(style_path) = &args.style {
        generator = generator.with_style(load_style(&args.root.join(style_path))?);
    }

    let mut deck = PptxDeck::new();
    let report = generator.generate(&document, &mut deck);
    if report.failures() > 0 {
        log::warn!("{} placement(s) failed; see the report for details", report.failures());
    }

    let output_path = args.root.join(&args.output);
    deck.save(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if args.report {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    println!("Saved presentation to {}", output_path.display());
    Ok(())
}

/// Read a style override file.
fn load_style(path: &Path) -> Result<StyleConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read style file {}", path.display()))?;
    StyleConfig::from_json(&json).with_context(|| format!("Invalid style file {}", path.display()))
}
