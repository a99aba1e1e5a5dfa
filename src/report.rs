//! Replacement report export and progress printing.
//!
//! Separate from core logic so the pipeline can be used as a library.
//! Printing functions have writer-generic `_to` variants for testing.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::pipeline::Replacement;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// CSV header of the replacement report.
pub const REPORT_HEADER: &str = "File,Line,String,Key,Original,Replacement";

/// Export the replacement report as CSV.
pub fn export_csv(path: &Path, replacements: &[Replacement]) -> Result<()> {
    fs::write(path, render_csv(replacements))
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

/// Render the CSV report.
///
/// The file, string, original, and replacement fields are wrapped in double
/// quotes; line and key are bare. Embedded quotes and commas are not
/// escaped — a documented limitation of the format.
pub fn render_csv(replacements: &[Replacement]) -> String {
    let mut out = String::from(REPORT_HEADER);
    out.push('\n');
    for rep in replacements {
        out.push_str(&format!(
            "\"{}\",{},\"{}\",{},\"{}\",\"{}\"\n",
            rep.file, rep.line, rep.text, rep.key, rep.original, rep.replacement
        ));
    }
    out
}

/// Print the run's summary counts as progress output.
pub fn print_progress(catalog_entries: usize, files_found: usize, candidates: usize) {
    print_progress_to(
        catalog_entries,
        files_found,
        candidates,
        &mut io::stdout().lock(),
    );
}

pub fn print_progress_to<W: Write>(
    catalog_entries: usize,
    files_found: usize,
    candidates: usize,
    writer: &mut W,
) {
    let _ = writeln!(writer, "Loaded {} localization strings", catalog_entries);
    let _ = writeln!(writer, "Found {} Dart files", files_found);
    let _ = writeln!(writer, "Found {} potential string replacements", candidates);
}

/// Print the proposed replacements, one line per entry; verbose mode adds
/// the original and rewritten line text.
pub fn print_replacements(replacements: &[Replacement], verbose: bool) {
    print_replacements_to(replacements, verbose, &mut io::stdout().lock());
}

pub fn print_replacements_to<W: Write>(
    replacements: &[Replacement],
    verbose: bool,
    writer: &mut W,
) {
    for rep in replacements {
        let _ = writeln!(
            writer,
            "{}:{}: \"{}\" -> {}",
            rep.file,
            rep.line,
            rep.text,
            rep.key.cyan()
        );
        if verbose {
            let _ = writeln!(writer, "  {} {}", "-".red(), rep.original);
            let _ = writeln!(writer, "  {} {}", "+".green(), rep.replacement);
        }
    }
}

/// Print per-file warnings collected during the run.
pub fn print_warnings(warnings: &[String]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[String], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}
