//! Source tree traversal.
//!
//! Walks the configured source root collecting Dart files in traversal
//! order, honoring the config's ignore globs.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// File extension of scannable source files.
pub const SOURCE_EXTENSION: &str = "dart";

/// Result of scanning the source tree.
pub struct ScanResult {
    /// Files in traversal order (not guaranteed sorted).
    pub files: Vec<PathBuf>,
    /// Entries skipped due to ignore patterns or traversal errors.
    pub skipped_count: usize,
}

pub fn scan_files(source_root: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(source_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }

        if patterns.iter().any(|p| p.matches_path(path)) {
            skipped_count += 1;
            continue;
        }

        files.push(path.to_path_buf());
    }

    ScanResult {
        files,
        skipped_count,
    }
}
