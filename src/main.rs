//! Hexmap Compiler - Entry Point
//!
//! Converts map JSON from the dungeon generator API into the `map_data.h`
//! header compiled into the ROM.

use clap::Parser;
use hexmap_compiler::core::config::ConverterConfig;
use hexmap_compiler::core::error::Result;
use hexmap_compiler::pipeline::{convert_file, Conversion};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Convert map JSON to a C header
#[derive(Parser, Debug)]
#[command(name = "hexmap-compiler")]
#[command(about = "Convert map JSON from the dungeon generator API to a C header")]
struct Args {
    /// Input JSON file from the map API
    input_json: PathBuf,

    /// Output C header file
    output_header: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(conversion) => {
            report_success(&args.output_header, &conversion);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Conversion> {
    let config = ConverterConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(strict = config.strict, "Converter configured");
    convert_file(&args.input_json, &args.output_header, &config)
}

fn report_success(output: &Path, conversion: &Conversion) {
    let summary = &conversion.map.summary;
    println!("Generated map header: {}", output.display());
    println!("  Hexagons: {}", conversion.map.hex_count());
    println!("  Seed: {}", summary.seed);
    println!("  Color Index: {}", summary.palette.index());
    if !conversion.report.is_empty() {
        println!("  Warnings: {}", conversion.report.len());
    }
}
