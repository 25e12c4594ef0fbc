//! # Directory aggregation
//!
//! Walks a directory tree depth-first and folds per-file counts into a
//! [`DirectoryStats`] tree. At every level the files are scanned first, then
//! the accepted subdirectories are descended in name order.
//!
//! Failures stay local: a file that cannot be resolved or read is skipped and
//! recorded, an unreadable subdirectory drops only its own subtree. Only an
//! unreadable root fails the whole call.
//!
//! Two traversals produce identical results:
//!
//! | Traversal | Stack use | Use Case |
//! |-----------|-----------|----------|
//! | `Recursive` | one frame per depth | ordinary trees |
//! | `WorkList` | constant | very deep trees |

use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use crate::options::{ScanMode, Traversal};
use crate::scanner::scan_file;
use crate::RunResult;
use cloc_core::language::{SymbolResolver, extension_of};
use cloc_core::{CommentSyntax, DirectoryStats, FileStats, ScanReport};
use hashbrown::HashSet;
use ignore::gitignore::Gitignore;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// 呼び出し側が与える名前フィルタ
pub type FilterPredicate<'a> = &'a dyn Fn(&str) -> bool;

/// ディレクトリ集計器
pub struct Aggregator<'a> {
    resolver: &'a dyn SymbolResolver,
    walk: &'a WalkOptions,
    verbose: bool,
    scan_mode: ScanMode,
    syntax_override: Option<&'a CommentSyntax>,
    file_filter: Option<FilterPredicate<'a>>,
    dir_filter: Option<FilterPredicate<'a>>,
}

impl<'a> Aggregator<'a> {
    /// Accepts every file and, when recursing, every subdirectory.
    #[must_use]
    pub fn new(resolver: &'a dyn SymbolResolver, walk: &'a WalkOptions) -> Self {
        Self {
            resolver,
            walk,
            verbose: true,
            scan_mode: ScanMode::default(),
            syntax_override: None,
            file_filter: None,
            dir_filter: None,
        }
    }

    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn scan_mode(mut self, mode: ScanMode) -> Self {
        self.scan_mode = mode;
        self
    }

    /// Uses one syntax for every file instead of resolving by extension.
    #[must_use]
    pub const fn syntax_override(mut self, syntax: Option<&'a CommentSyntax>) -> Self {
        self.syntax_override = syntax;
        self
    }

    #[must_use]
    pub fn file_filter(mut self, filter: FilterPredicate<'a>) -> Self {
        self.file_filter = Some(filter);
        self
    }

    /// Narrows which subdirectories a recursive walk enters. Without one, a
    /// recursive walk enters all of them; a non-recursive walk never does.
    #[must_use]
    pub fn dir_filter(mut self, filter: FilterPredicate<'a>) -> Self {
        self.dir_filter = Some(filter);
        self
    }

    /// Aggregates the tree under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DirectoryAccess`] when `root` itself cannot be
    /// listed. Everything below the root is skipped and reported in
    /// [`RunResult::errors`] instead.
    pub fn aggregate(&self, root: &Path) -> Result<RunResult> {
        let mut walk = Walk {
            agg: self,
            errors: Vec::new(),
            visited: HashSet::new(),
        };

        let tree = match self.walk.traversal {
            Traversal::Recursive => walk.recursive(root, &[])?,
            Traversal::WorkList => walk.work_list(root)?,
        };

        let report = if self.verbose {
            ScanReport::Detailed(tree)
        } else {
            ScanReport::Summary(tree.total())
        };

        Ok(RunResult {
            report,
            errors: walk.errors,
        })
    }

    /// Scans a single file as a one-entry run.
    ///
    /// # Errors
    ///
    /// Unlike directory runs, resolution and access failures are returned
    /// because there is nothing else to count.
    pub fn scan_single(&self, path: &Path) -> Result<RunResult> {
        let name = entry_name(path);
        let stats = self.scan_one(&name, path)?;

        let report = if self.verbose {
            let mut tree = DirectoryStats::new();
            tree.add_file(name, stats);
            ScanReport::Detailed(tree)
        } else {
            ScanReport::Summary(stats)
        };

        Ok(RunResult {
            report,
            errors: Vec::new(),
        })
    }

    fn scan_one(&self, name: &str, path: &Path) -> Result<FileStats> {
        let syntax = match self.syntax_override {
            Some(syntax) => Cow::Borrowed(syntax),
            None => Cow::Owned(self.resolver.resolve(extension_of(name))?),
        };
        scan_file(path, &syntax, self.scan_mode)
    }

    fn accepts_file(&self, name: &str) -> bool {
        self.file_filter.is_none_or(|f| f(name))
    }

    fn accepts_dir(&self, name: &str) -> bool {
        self.walk.recurse && self.dir_filter.is_none_or(|f| f(name))
    }
}

/// Convenience form of [`Aggregator`] taking every knob at once.
///
/// # Errors
///
/// See [`Aggregator::aggregate`].
pub fn aggregate(
    root: &Path,
    resolver: &dyn SymbolResolver,
    file_filter: FilterPredicate<'_>,
    dir_filter: Option<FilterPredicate<'_>>,
    recurse: bool,
    verbose: bool,
) -> Result<RunResult> {
    let walk = WalkOptions {
        recurse,
        ..WalkOptions::default()
    };
    let mut agg = Aggregator::new(resolver, &walk)
        .verbose(verbose)
        .file_filter(file_filter);
    if let Some(filter) = dir_filter {
        agg = agg.dir_filter(filter);
    }
    agg.aggregate(root)
}

/// 1ディレクトリ分の走査結果
struct Level {
    node: DirectoryStats,
    /// 降りる予定のサブディレクトリ（名前順）
    subdirs: Vec<(String, PathBuf)>,
    ignores: Vec<Gitignore>,
}

struct Frame {
    name: String,
    level: Level,
}

/// Per-call walk state. Nothing here outlives one `aggregate` call.
struct Walk<'w, 'a> {
    agg: &'w Aggregator<'a>,
    errors: Vec<(PathBuf, EngineError)>,
    visited: HashSet<PathBuf>,
}

impl Walk<'_, '_> {
    fn recursive(&mut self, dir: &Path, inherited: &[Gitignore]) -> Result<DirectoryStats> {
        let Level {
            mut node,
            subdirs,
            ignores,
        } = self.open_level(dir, inherited)?;

        for (name, path) in subdirs {
            match self.recursive(&path, &ignores) {
                Ok(child) => self.merge(&mut node, name, child),
                Err(err) if err.is_recoverable() => self.skip(path, err),
                Err(err) => return Err(err),
            }
        }

        Ok(node)
    }

    fn work_list(&mut self, root: &Path) -> Result<DirectoryStats> {
        let mut level = self.open_level(root, &[])?;
        level.subdirs.reverse();
        let mut stack = vec![Frame {
            name: String::new(),
            level,
        }];
        let mut finished = DirectoryStats::new();

        while let Some(top) = stack.last_mut() {
            if let Some((name, path)) = top.level.subdirs.pop() {
                match self.open_level(&path, &top.level.ignores) {
                    Ok(mut level) => {
                        level.subdirs.reverse();
                        stack.push(Frame { name, level });
                    }
                    Err(err) if err.is_recoverable() => self.skip(path, err),
                    Err(err) => return Err(err),
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            match stack.last_mut() {
                Some(parent) => self.merge(&mut parent.level.node, done.name, done.level.node),
                None => finished = done.level.node,
            }
        }

        Ok(finished)
    }

    /// Scans the files of one directory and lists the subdirectories to visit.
    fn open_level(&mut self, dir: &Path, inherited: &[Gitignore]) -> Result<Level> {
        log::debug!("scanning directory {}", dir.display());

        if self.agg.walk.follow_links {
            let canonical = fs::canonicalize(dir).map_err(|e| dir_access(dir, e))?;
            if !self.visited.insert(canonical) {
                return Err(dir_access(
                    dir,
                    std::io::Error::other("directory already visited through a link"),
                ));
            }
        }

        let ignores = self.ignores_for(dir, inherited);
        let (files, dirs) = self.list(dir, &ignores)?;

        let mut node = DirectoryStats::new();
        for (name, path) in files {
            if !self.agg.accepts_file(&name) {
                continue;
            }
            match self.agg.scan_one(&name, &path) {
                Ok(stats) if self.agg.verbose => {
                    let key = distinct_key(name, |k| node.files().contains_key(k));
                    node.add_file(key, stats);
                }
                Ok(stats) => node.fold_total(stats),
                Err(err) if err.is_recoverable() => self.skip(path, err),
                Err(err) => return Err(err),
            }
        }

        let subdirs = dirs
            .into_iter()
            .filter(|(name, _)| self.agg.accepts_dir(name))
            .collect();

        Ok(Level {
            node,
            subdirs,
            ignores,
        })
    }

    /// Immediate files and directories of `dir`, each sorted by name.
    #[allow(clippy::type_complexity)]
    fn list(
        &mut self,
        dir: &Path,
        ignores: &[Gitignore],
    ) -> Result<(Vec<(String, PathBuf)>, Vec<(String, PathBuf)>)> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for entry in fs::read_dir(dir).map_err(|e| dir_access(dir, e))? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.skip(dir.to_path_buf(), dir_access(dir, err));
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();

            if self.agg.walk.skip_hidden && name.starts_with('.') {
                continue;
            }

            let Some(is_dir) = self.entry_kind(&entry, &path) else {
                continue;
            };
            if is_ignored(ignores, &path, is_dir) {
                log::debug!("ignored by .gitignore: {}", path.display());
                continue;
            }

            if is_dir {
                dirs.push((name, path));
            } else {
                files.push((name, path));
            }
        }

        files.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        dirs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        Ok((files, dirs))
    }

    /// `Some(true)` for directories, `Some(false)` for files, `None` otherwise.
    fn entry_kind(&self, entry: &fs::DirEntry, path: &Path) -> Option<bool> {
        let file_type = entry.file_type().ok()?;
        if file_type.is_symlink() {
            if !self.agg.walk.follow_links {
                return None;
            }
            return match fs::metadata(path) {
                Ok(meta) if meta.is_dir() => Some(true),
                Ok(meta) if meta.is_file() => Some(false),
                Ok(_) => None,
                Err(err) => {
                    log::warn!("dangling link {}: {err}", path.display());
                    None
                }
            };
        }
        if file_type.is_dir() {
            Some(true)
        } else if file_type.is_file() {
            Some(false)
        } else {
            None
        }
    }

    fn ignores_for(&self, dir: &Path, inherited: &[Gitignore]) -> Vec<Gitignore> {
        let mut ignores = inherited.to_vec();
        if self.agg.walk.git_ignore {
            let path = dir.join(".gitignore");
            if path.is_file() {
                let (matcher, err) = Gitignore::new(&path);
                if let Some(err) = err {
                    log::warn!("{}: {err}", path.display());
                }
                ignores.push(matcher);
            }
        }
        ignores
    }

    fn merge(&self, parent: &mut DirectoryStats, name: String, child: DirectoryStats) {
        if self.agg.verbose {
            let key = distinct_key(name, |k| parent.subdirectories().contains_key(k));
            parent.add_subdirectory(key, child);
        } else {
            parent.fold_total(child.total());
        }
    }

    fn skip(&mut self, path: PathBuf, err: EngineError) {
        log::warn!("skipping {}: {err}", path.display());
        self.errors.push((path, err));
    }
}

/// Innermost `.gitignore` with an opinion wins.
fn is_ignored(ignores: &[Gitignore], path: &Path, is_dir: bool) -> bool {
    for matcher in ignores.iter().rev() {
        let m = matcher.matched(path, is_dir);
        if m.is_ignore() {
            return true;
        }
        if m.is_whitelist() {
            return false;
        }
    }
    false
}

/// 非 UTF-8 の名前は lossy 変換で衝突しうるので、後の方に番号を付ける
fn distinct_key(name: String, taken: impl Fn(&str) -> bool) -> String {
    if !taken(&name) {
        return name;
    }
    let mut n = 2;
    loop {
        let key = format!("{name} ({n})");
        if !taken(&key) {
            return key;
        }
        n += 1;
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
        .into_owned()
}

fn dir_access(path: &Path, source: std::io::Error) -> EngineError {
    EngineError::DirectoryAccess {
        path: path.to_path_buf(),
        source,
    }
}
