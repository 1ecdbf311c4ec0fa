/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! Reads and writes both models as JSON and runs one conversion per
//! invocation.

use crate::convert::{self, ConversionOptions, MetadataMap};
use crate::external::ExternalAtoms;
use crate::system::{names, AbstractSystem, PropertyValue};
use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{info, LevelFilter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Convert atomistic structures between the abstract and external models
#[derive(Parser, Debug)]
#[command(name = "atoms-bridge", version, about)]
pub struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an abstract system (JSON) to external atoms (JSON)
    ToExternal(ConvertArgs),
    /// Convert external atoms (JSON) to an abstract system (JSON)
    ToAbstract(ConvertArgs),
    /// Attach per-species metadata to an abstract system
    Attach(AttachArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input JSON file
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output JSON file, standard output if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// JSON file with conversion options
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct AttachArgs {
    /// Input abstract system JSON file
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output JSON file, standard output if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Name of the per-atom property receiving the metadata
    #[arg(long, default_value = names::PSEUDOPOTENTIAL)]
    pub kind: String,
    /// SYMBOL=VALUE pair, may be repeated
    #[arg(short, long = "entry", value_parser = parse_entry, required = true)]
    pub entries: Vec<(String, String)>,
}

/// Log level for a number of -v flags
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_entry(entry: &str) -> std::result::Result<(String, String), String> {
    match entry.split_once('=') {
        Some((symbol, value)) if !symbol.is_empty() && !value.is_empty() => {
            Ok((symbol.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected SYMBOL=VALUE, got '{}'", entry)),
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_options(path: Option<&Path>) -> Result<ConversionOptions> {
    match path {
        Some(path) => {
            let json = read_input(path)?;
            ConversionOptions::from_json(&json)
                .with_context(|| format!("invalid conversion options in {}", path.display()))
        }
        None => Ok(ConversionOptions::default()),
    }
}

fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

/// Execute the command selected on the command line
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::ToExternal(args) => {
            let options = load_options(args.config.as_deref())?;
            let system = AbstractSystem::from_json(&read_input(&args.input)?)
                .with_context(|| format!("invalid abstract system in {}", args.input.display()))?;
            let atoms = convert::to_external_with(&system, &options)?;
            info!("converted {} atoms to external atoms", atoms.len());
            write_output(args.output.as_deref(), &atoms.to_json()?)
        }
        Command::ToAbstract(args) => {
            let options = load_options(args.config.as_deref())?;
            let atoms = ExternalAtoms::from_json(&read_input(&args.input)?)
                .with_context(|| format!("invalid external atoms in {}", args.input.display()))?;
            let system = convert::to_abstract_with(&atoms, &options)?;
            info!("converted {} atoms to an abstract system", system.len());
            write_output(args.output.as_deref(), &system.to_json()?)
        }
        Command::Attach(args) => {
            let system = AbstractSystem::from_json(&read_input(&args.input)?)
                .with_context(|| format!("invalid abstract system in {}", args.input.display()))?;
            let metadata = args
                .entries
                .iter()
                .fold(MetadataMap::new(args.kind.as_str()), |map, (symbol, value)| {
                    map.with_entry(symbol.as_str(), PropertyValue::Text(value.clone()))
                });
            let attached = convert::attach(&system, &metadata)?;
            write_output(args.output.as_deref(), &attached.to_json()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry("Mg=hgh/lda/mg-q2"),
            Ok(("Mg".to_string(), "hgh/lda/mg-q2".to_string()))
        );
        assert!(parse_entry("Mg").is_err());
        assert!(parse_entry("=value").is_err());
        assert!(parse_entry("Mg=").is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(7), LevelFilter::Trace);
    }

    #[test]
    fn test_argument_parsing() {
        let cli = Cli::try_parse_from([
            "atoms-bridge",
            "-vv",
            "attach",
            "-i",
            "system.json",
            "-e",
            "Mg=hgh/lda/mg-q2",
            "--entry",
            "O=hgh/lda/o-q6",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Attach(args) => {
                assert_eq!(args.kind, "pseudopotential");
                assert_eq!(args.entries.len(), 2);
                assert_eq!(args.output, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from(["atoms-bridge", "attach", "-i", "system.json"]).is_err());
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
