//! Interactive application of proposed replacements.
//!
//! Replacements are grouped per file and confirmed one at a time. Within a
//! file they are processed in descending line order so earlier line indices
//! stay valid while the buffer is edited. Prompt I/O is generic over
//! `BufRead`/`Write` so the loop can be driven from tests.

use std::{
    fs,
    io::{BufRead, Write},
};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::pipeline::Replacement;

/// Decision for a single proposed replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Yes,
    No,
    All,
}

/// In-memory edit session for one file.
///
/// Lines keep their separators (`split_inclusive`), so committing
/// reproduces the file byte-for-byte apart from applied edits. Owned
/// exclusively by the apply loop and discarded after commit.
pub struct FileEditSession {
    path: String,
    lines: Vec<String>,
    modified: bool,
}

impl FileEditSession {
    pub fn open(path: &str) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
        Ok(Self {
            path: path.to_string(),
            lines: content.split_inclusive('\n').map(String::from).collect(),
            modified: false,
        })
    }

    /// Substitute the stored original text with the replacement text on the
    /// replacement's 1-based line.
    ///
    /// The trimmed original is replaced inside the physical line, which
    /// keeps indentation and the line terminator. A literal that also
    /// occurs as part of a longer literal on the same line is not specially
    /// handled; the first match of the original text wins.
    pub fn apply(&mut self, rep: &Replacement) {
        if rep.line == 0 {
            return;
        }
        if let Some(line) = self.lines.get_mut(rep.line - 1) {
            let updated = line.replace(&rep.original, &rep.replacement);
            if updated != *line {
                *line = updated;
                self.modified = true;
            }
        }
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Write the buffer back if at least one replacement was applied.
    ///
    /// Returns whether the file was written.
    pub fn commit(self) -> Result<bool> {
        if !self.modified {
            return Ok(false);
        }
        fs::write(&self.path, self.lines.concat())
            .with_context(|| format!("Failed to write file: {}", self.path))?;
        Ok(true)
    }
}

/// Summary of an interactive apply run.
#[derive(Debug, Default)]
pub struct ApplySummary {
    pub applied_count: usize,
    pub modified_files: Vec<String>,
}

/// Drive the confirmation loop over all replacements.
///
/// Files are visited in first-appearance order of the replacement list.
/// Answering `a` applies the current entry and every not-yet-prompted entry
/// for the file without further prompts; entries already skipped stay
/// skipped. A file is written back only when at least one entry was
/// applied, so aborting mid-file loses nothing for untouched files.
pub fn interactive_apply<R: BufRead, W: Write>(
    replacements: &[Replacement],
    input: &mut R,
    output: &mut W,
) -> Result<ApplySummary> {
    let mut summary = ApplySummary::default();

    for (file, mut file_reps) in group_by_file(replacements) {
        writeln!(output)?;
        writeln!(output, "Processing file: {}", file)?;
        writeln!(output, "Found {} potential replacements", file_reps.len())?;

        let mut session = match FileEditSession::open(&file) {
            Ok(session) => session,
            Err(e) => {
                writeln!(output, "{} {:#}", "warning:".bold().yellow(), e)?;
                continue;
            }
        };

        // Descending line order keeps earlier indices valid while editing.
        file_reps.sort_by(|a, b| b.line.cmp(&a.line));

        let mut apply_all = false;
        for rep in &file_reps {
            if apply_all {
                session.apply(rep);
                summary.applied_count += 1;
                continue;
            }

            print_proposal(output, rep)?;
            match read_choice(input, output)? {
                Choice::Yes => {
                    session.apply(rep);
                    summary.applied_count += 1;
                }
                Choice::All => {
                    session.apply(rep);
                    summary.applied_count += 1;
                    apply_all = true;
                }
                Choice::No => {}
            }
        }

        if session.commit()? {
            writeln!(output, "Modified file: {}", file)?;
            summary.modified_files.push(file);
        }
    }

    writeln!(output)?;
    writeln!(
        output,
        "Completed! Modified {} files.",
        summary.modified_files.len()
    )?;
    Ok(summary)
}

fn print_proposal<W: Write>(output: &mut W, rep: &Replacement) -> Result<()> {
    writeln!(output, "{}", "=".repeat(80))?;
    writeln!(output, "Line {}:", rep.line)?;
    writeln!(output, "{}", rep.context)?;
    writeln!(output, "{}", "-".repeat(80))?;
    writeln!(output, "String: '{}'", rep.text)?;
    writeln!(output, "Key: {}", rep.key)?;
    writeln!(output, "Original: {}", rep.original)?;
    writeln!(output, "Replacement: {}", rep.replacement)?;
    Ok(())
}

fn read_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Choice> {
    write!(output, "Apply this replacement? (y/n/a - yes/no/all): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Choice::Yes,
        "a" | "all" => Choice::All,
        _ => Choice::No,
    })
}

/// Group replacements by file, preserving first-appearance order.
fn group_by_file(replacements: &[Replacement]) -> Vec<(String, Vec<Replacement>)> {
    let mut groups: Vec<(String, Vec<Replacement>)> = Vec::new();
    for rep in replacements {
        match groups.iter_mut().find(|(file, _)| *file == rep.file) {
            Some((_, reps)) => reps.push(rep.clone()),
            None => groups.push((rep.file.clone(), vec![rep.clone()])),
        }
    }
    groups
}
