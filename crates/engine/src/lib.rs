// crates/engine/src/lib.rs
use std::path::PathBuf;

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod options;
pub mod scanner;
pub mod symbols;

use crate::aggregate::Aggregator;
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::Target;
use crate::symbols::SymbolTable;
use cloc_core::ScanReport;
use cloc_core::language::{BuiltinTable, SymbolResolver};

/// Outcome of one run: the counts plus everything that was skipped on the way.
#[derive(Debug)]
pub struct RunResult {
    pub report: ScanReport,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Run the line counting engine.
///
/// # Errors
///
/// Returns an error when the configuration cannot be used (bad extension
/// table), when the root directory cannot be listed, or when a single-file
/// target cannot be resolved or read. Failures below a directory root are
/// collected in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    let resolver: Box<dyn SymbolResolver> = match &config.languages {
        Some(path) => Box::new(SymbolTable::load(path)?),
        None => {
            let table = BuiltinTable::new();
            log::debug!("using builtin table ({} extensions)", table.len());
            Box::new(table)
        }
    };

    let accepts_file = |name: &str| {
        config
            .file_filter
            .as_ref()
            .is_none_or(|filter| filter.accepts(name))
    };
    let accepts_dir = |name: &str| {
        config
            .dir_filter
            .as_ref()
            .is_none_or(|filter| filter.accepts(name))
    };

    let aggregator = Aggregator::new(resolver.as_ref(), &config.walk)
        .verbose(config.verbose)
        .scan_mode(config.scan_mode)
        .syntax_override(config.syntax_override.as_ref())
        .file_filter(&accepts_file)
        .dir_filter(&accepts_dir);

    let result = match &config.target {
        Target::File(path) => aggregator.scan_single(path)?,
        Target::Directory(path) => aggregator.aggregate(path)?,
    };

    let total = result.report.total();
    if let Some(tree) = result.report.tree() {
        log::debug!("{} files recorded", tree.file_count());
    }
    log::info!(
        "{} code lines / {} total lines, {} blank or comment ({} skipped)",
        total.code_lines,
        total.total_lines,
        total.non_code_lines(),
        result.errors.len()
    );

    Ok(result)
}
