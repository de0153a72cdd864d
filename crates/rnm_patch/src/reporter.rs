use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::debug;
use rnm_core::PatchResult;

pub fn print_header<W: Write>(writer: &mut W, root: &Path, dry_run: bool) -> io::Result<()> {
    writeln!(writer, "Patching files containing 'node_modules' in '{}'", root.display())?;
    if dry_run {
        writeln!(
            writer,
            "{}",
            "(except no files will be updated, as this is a dry run)".dimmed()
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Lists every patched file followed by its replacements
pub fn print_replacements<W: Write>(writer: &mut W, result: &PatchResult) -> io::Result<()> {
    debug!("Printing replacements for {} files", result.files.len());
    writeln!(writer, "\nReplacements:")?;
    for file in &result.files {
        writeln!(writer, "{}", file.path.dimmed())?;
        for replacement in &file.replacements {
            writeln!(writer, "  '{}' → '{}'", replacement.from, replacement.to)?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn print_summary<W: Write>(
    writer: &mut W,
    result: &PatchResult,
    elapsed_ms: u128,
    dry_run: bool,
) -> io::Result<()> {
    let verb = if dry_run { "Would patch" } else { "Patched" };
    writeln!(
        writer,
        "\n{} {} {} files ({} replacements) of {} scanned in {}ms.",
        "●".bright_blue(),
        verb,
        result.files.len().to_string().cyan(),
        result.total_replacements().to_string().cyan(),
        result.files_scanned.to_string().cyan(),
        elapsed_ms.to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_json<W: Write>(writer: &mut W, result: &PatchResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
