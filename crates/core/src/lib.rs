//! Comment-aware line counting core.
//!
//! Everything here works on byte slices and owns no I/O: the engine crate feeds
//! it file contents, the CLI renders what comes back.
#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod batch;
pub mod error;
pub mod language;
pub mod parser;
pub mod stats;
pub mod syntax;

pub use error::{ResolutionError, SyntaxError};
pub use stats::{DirectoryStats, FileStats, ScanReport};
pub use syntax::CommentSyntax;
