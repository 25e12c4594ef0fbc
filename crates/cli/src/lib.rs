// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use crate::presentation::{Document, General};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan, then write the report in the requested format.
///
/// # Errors
///
/// Usage and configuration errors, a fatal engine error (unreadable root,
/// unresolvable single file), or a failure while writing the output.
pub fn run(args: Args) -> Result<()> {
    let format = args.output_format();
    let output = args.output.clone();
    let config = Config::try_from(args)?;

    let result = cloc_engine::run(&config)?;
    if !result.errors.is_empty() {
        log::warn!("{} entries skipped", result.errors.len());
    }

    let document = Document::new(General::now(result.report.total()), &result.report);
    presentation::emit(&document, format, output.as_deref())
}
