//! Per-file orchestration of extraction, matching, and rewrite generation.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::{catalog::FlatCatalog, extract::Extractor, matcher, rewrite};

/// A candidate paired with its resolved key, the verbatim original line,
/// and the generated replacement line. Immutable once produced.
///
/// `original` and `replacement` are stored trimmed; the interactive apply
/// step substitutes one for the other inside the physical line, which keeps
/// indentation and the line terminator intact.
#[derive(Debug, Clone)]
pub struct Replacement {
    pub file: String,
    pub line: usize,
    pub text: String,
    pub key: String,
    pub original: String,
    pub replacement: String,
    pub context: String,
}

/// Aggregated result of running the pipeline over a file set.
#[derive(Debug, Default)]
pub struct PipelineResult {
    pub replacements: Vec<Replacement>,
    pub warnings: Vec<String>,
}

/// Run extraction and matching across `files`.
///
/// Files are processed in parallel; the catalog is shared read-only and
/// per-file work is independent. Result order follows the input file order.
/// A file that cannot be read contributes a warning instead of aborting the
/// run.
pub fn process_files(
    files: &[PathBuf],
    extractor: &Extractor,
    catalog: &FlatCatalog,
) -> PipelineResult {
    let per_file: Vec<Result<Vec<Replacement>, String>> = files
        .par_iter()
        .map(|file| process_file(file, extractor, catalog).map_err(|e| format!("{:#}", e)))
        .collect();

    let mut result = PipelineResult::default();
    for outcome in per_file {
        match outcome {
            Ok(replacements) => result.replacements.extend(replacements),
            Err(warning) => result.warnings.push(warning),
        }
    }
    result
}

fn process_file(
    file: &Path,
    extractor: &Extractor,
    catalog: &FlatCatalog,
) -> Result<Vec<Replacement>> {
    // First read: the whole buffer, for pattern offsets and context windows.
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let candidates = extractor.extract(&content);
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    // Second read: random access to physical lines for the verbatim
    // original line text.
    let line_text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    let lines: Vec<&str> = line_text.lines().collect();

    let mut replacements = Vec::new();
    for candidate in candidates {
        let Some(key) = matcher::find_best_match(&candidate.text, catalog) else {
            continue;
        };
        let Some(original_line) = lines.get(candidate.line - 1) else {
            continue;
        };

        let replacement_line = rewrite::generate_replacement(original_line, &candidate.text, key);
        replacements.push(Replacement {
            file: file.display().to_string(),
            line: candidate.line,
            key: key.to_string(),
            original: original_line.trim().to_string(),
            replacement: replacement_line.trim().to_string(),
            text: candidate.text,
            context: candidate.context,
        });
    }

    Ok(replacements)
}
