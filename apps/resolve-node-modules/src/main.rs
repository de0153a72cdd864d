use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::debug;
use rnm_patch::Config;
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() {
    // Unresolved paths are reported as warnings, so show them unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();

    if !cfg.json {
        rnm_patch::print_header(&mut stdout, &cfg.root_path()?, cfg.dry_run)?;
    }

    let result = rnm_patch::run_patch(&cfg)?;
    let elapsed_ms = start.elapsed().as_millis();

    if cfg.json {
        rnm_patch::print_json(&mut stdout, &result)?;
    } else {
        rnm_patch::print_replacements(&mut stdout, &result)?;
        rnm_patch::print_summary(&mut stdout, &result, elapsed_ms, cfg.dry_run)?;
    }
    stdout.flush()?;

    Ok(())
}
