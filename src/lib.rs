//! Lokey - hardcoded string migration for Flutter easy_localization
//!
//! Lokey is a CLI tool and library for finding hardcoded user-visible
//! strings in Flutter projects and replacing them with easy_localization
//! key lookups. It scans Dart sources with positional text patterns,
//! matches each literal against a flattened translation catalog, and
//! proposes `.tr()` rewrites that can be exported as a report or applied
//! interactively.
//!
//! ## Module Structure
//!
//! - `apply`: Interactive application of proposed replacements
//! - `catalog`: Translation catalog loading and flattening
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `extract`: Candidate string extraction from Dart source text
//! - `matcher`: Literal-to-key matching
//! - `pipeline`: Per-file orchestration of the migration pipeline
//! - `report`: CSV report export and progress output
//! - `rewrite`: Replacement line generation
//! - `scanner`: Source tree traversal

pub mod apply;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod extract;
pub mod matcher;
pub mod pipeline;
pub mod report;
pub mod rewrite;
pub mod scanner;
