/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Main executable for atoms-bridge

use atoms_bridge::cli::{self, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v
    env_logger::Builder::new()
        .filter_level(cli::log_level(cli.verbose))
        .parse_default_env()
        .init();

    cli::run(&cli)
}
