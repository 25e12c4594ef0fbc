// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use cloc_core::CommentSyntax;
pub use cloc_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use cloc_engine::error::EngineError;
use cloc_engine::filter::{FilterMode, NameFilter};
use cloc_engine::options::{ScanMode, Target, Traversal};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let target = target_from_args(&args)?;
        let walk = walk_options_from_args(&args)?;
        let syntax_override =
            syntax_from_args(args.single_symbol.as_deref(), args.multiline_symbol.as_deref())?;

        let scan_mode = match (args.sequential, args.batch_size) {
            (true, _) => ScanMode::Sequential,
            (false, Some(size)) => ScanMode::Batched(size as usize),
            (false, None) => ScanMode::default(),
        };

        ConfigBuilder::default()
            .target(target)
            .walk(walk)
            .verbose(args.verbose)
            .scan_mode(scan_mode)
            .syntax_override(syntax_override)
            .languages(args.languages)
            .file_filter(file_filter_from_args(
                &args.include_file,
                &args.include_type,
                &args.exclude_file,
                &args.exclude_type,
            )?)
            .dir_filter(dir_filter_from_args(&args.include_dir, &args.exclude_dir)?)
            .build()
            .map_err(|e| AppError::Usage(e.to_string()))
    }
}

fn target_from_args(args: &Args) -> Result<Target> {
    match (&args.file, &args.dir) {
        (Some(file), None) => {
            if !file.is_file() {
                return Err(AppError::Usage(format!(
                    "'{}' is not a valid file",
                    file.display()
                )));
            }
            Ok(Target::File(file.clone()))
        }
        (None, Some(dir)) => {
            if !dir.is_dir() {
                return Err(AppError::Usage(format!(
                    "'{}' is not a valid directory",
                    dir.display()
                )));
            }
            Ok(Target::Directory(dir.clone()))
        }
        _ => Err(AppError::Usage(
            "specify exactly one of --dir or --file".to_string(),
        )),
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions> {
    let traversal = if args.work_list {
        Traversal::WorkList
    } else {
        Traversal::Recursive
    };

    WalkOptionsBuilder::default()
        .recurse(args.recurse)
        .traversal(traversal)
        .skip_hidden(args.skip_hidden)
        .git_ignore(args.git_ignore)
        .follow_links(args.follow)
        .build()
        .map_err(|e| AppError::Usage(e.to_string()))
}

/// Symbols given on the command line, applied to every file.
fn syntax_from_args(single: Option<&str>, multi: Option<&str>) -> Result<Option<CommentSyntax>> {
    if single.is_none() && multi.is_none() {
        return Ok(None);
    }

    let single = single.map(|s| s.trim().as_bytes());
    let multi = multi
        .map(CommentSyntax::parse_pair)
        .transpose()
        .map_err(EngineError::from)?;

    let syntax = CommentSyntax::from_parts(single, multi).map_err(EngineError::from)?;
    Ok(Some(syntax))
}

fn file_filter_from_args(
    include_names: &[String],
    include_types: &[String],
    exclude_names: &[String],
    exclude_types: &[String],
) -> Result<Option<NameFilter>> {
    let included = !include_names.is_empty() || !include_types.is_empty();
    let excluded = !exclude_names.is_empty() || !exclude_types.is_empty();

    let filter = match (included, excluded) {
        (true, true) => {
            return Err(AppError::Usage(
                "file inclusion and exclusion cannot be combined".to_string(),
            ));
        }
        (true, false) => NameFilter::new(FilterMode::Include, include_names, include_types)?,
        (false, true) => NameFilter::new(FilterMode::Exclude, exclude_names, exclude_types)?,
        (false, false) => return Ok(None),
    };
    Ok(Some(filter))
}

fn dir_filter_from_args(include: &[String], exclude: &[String]) -> Result<Option<NameFilter>> {
    let filter = match (include.is_empty(), exclude.is_empty()) {
        (false, false) => {
            return Err(AppError::Usage(
                "directory inclusion and exclusion cannot be combined".to_string(),
            ));
        }
        (false, true) => NameFilter::names(FilterMode::Include, include)?,
        (true, false) => NameFilter::names(FilterMode::Exclude, exclude)?,
        (true, true) => return Ok(None),
    };
    Ok(Some(filter))
}
