//! CLI tool for extracting slide titles and text from PowerPoint files as YAML.

use anyhow::{Context, Result};
use clap::Parser;
use pptx_to_yaml::{convert, resolve_input, Conversion, ConvertConfig, ErrorRecord, Mode, OutputFormat};
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

const OP_INPUT: &str = "resolve_input";

/// Extract slide titles and text from PowerPoint files.
#[derive(Parser, Debug)]
#[command(name = "pptx-to-yaml")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PowerPoint file(s) (.pptx)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format: yaml or xml (xml is not supported yet)
    #[arg(short = 'f', long, default_value = "yaml")]
    output_format: OutputFormat,

    /// Only print the number of slides
    #[arg(short = 'c', long)]
    slides_count: bool,

    /// Only print the slide titles
    #[arg(short = 't', long)]
    slide_titles: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = ConvertConfig::builder()
        .output_format(args.output_format)
        .slides_count(args.slides_count)
        .slide_titles(args.slide_titles)
        .build();

    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;

    // Files are independent of each other, results keep the input order.
    let conversions: Vec<Conversion> = args
        .input
        .par_iter()
        .map(|raw| match resolve_input(raw, &cwd) {
            Ok(path) => convert(&path, &config),
            Err(e) => Conversion {
                records: Vec::new(),
                errors: vec![ErrorRecord::new(OP_INPUT, e)],
            },
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (raw, conversion) in args.input.iter().zip(&conversions) {
        write_records(&mut out, conversion, config.mode)
            .with_context(|| format!("Failed to write output for {}", raw.display()))?;

        for record in &conversion.errors {
            log::error!("{}: {}", raw.display(), record);
        }
        log::debug!("{}: {} records written", raw.display(), conversion.records.len());
    }
    out.flush().context("Failed to flush output")?;

    Ok(if has_errors(&conversions) { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn has_errors(conversions: &[Conversion]) -> bool {
    conversions.iter().any(|c| !c.errors.is_empty())
}

/// Writes the records of one conversion, slide documents are separated by `---`.
fn write_records(out: &mut impl Write, conversion: &Conversion, mode: Mode) -> std::io::Result<()> {
    for record in &conversion.records {
        if mode == Mode::Content {
            out.write_all(b"---\n")?;
        }
        out.write_all(record.as_bytes())?;
    }
    Ok(())
}
