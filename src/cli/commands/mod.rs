//! Command handlers and the pipeline setup they share.

pub mod apply;
pub mod init;
pub mod scan;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::{
    catalog::FlatCatalog,
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config},
    extract::Extractor,
    pipeline::{self, PipelineResult},
    report, scanner,
};

/// Everything scan and apply share: config resolution, catalog loading,
/// source traversal, and the matching pipeline, with progress printed
/// along the way.
pub fn run_pipeline(common: &CommonArgs) -> Result<PipelineResult> {
    let config = Config::load(Path::new("."))?;

    let catalog_path = common
        .catalog
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.catalog_path));
    let source_root = common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.source_root));

    if !source_root.exists() {
        bail!(
            "Source directory '{}' does not exist.\n\
             Hint: Check your {} 'sourceRoot' setting or pass --source-root.",
            source_root.display(),
            CONFIG_FILE_NAME
        );
    }

    let catalog = FlatCatalog::load(&catalog_path)?;
    let extractor = Extractor::new(&config.checked_attributes)?;

    let scan = scanner::scan_files(&source_root, &config.ignores, common.verbose);
    let result = pipeline::process_files(&scan.files, &extractor, &catalog);

    report::print_progress(catalog.len(), scan.files.len(), result.replacements.len());
    report::print_warnings(&result.warnings);

    Ok(result)
}
