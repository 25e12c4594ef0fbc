use alloc::collections::BTreeMap;
use alloc::string::String;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use serde::{Deserialize, Serialize};

/// ファイル単位の集計結果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// コード行数
    #[serde(rename = "loc")]
    pub code_lines: usize,
    /// 総行数
    pub total_lines: usize,
}

impl FileStats {
    #[must_use]
    pub const fn new(code_lines: usize, total_lines: usize) -> Self {
        Self {
            code_lines,
            total_lines,
        }
    }

    /// Blank plus comment lines.
    #[must_use]
    pub const fn non_code_lines(&self) -> usize {
        self.total_lines.saturating_sub(self.code_lines)
    }
}

impl Add for FileStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.code_lines + rhs.code_lines,
            self.total_lines + rhs.total_lines,
        )
    }
}

impl AddAssign for FileStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for FileStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// ディレクトリ単位の集計ツリー
///
/// `total` always equals the sum of `files` plus the totals of
/// `subdirectories`; the mutators below are the only way totals change.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    files: BTreeMap<String, FileStats>,
    subdirectories: BTreeMap<String, DirectoryStats>,
    total: FileStats,
}

impl DirectoryStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one scanned file. A repeated name replaces the earlier entry.
    pub fn add_file(&mut self, name: impl Into<String>, stats: FileStats) {
        if let Some(previous) = self.files.insert(name.into(), stats) {
            self.total = Self::subtract(self.total, previous);
        }
        self.total += stats;
    }

    /// Nests a finished subtree and folds its total into this node.
    pub fn add_subdirectory(&mut self, name: impl Into<String>, child: Self) {
        let child_total = child.total;
        if let Some(previous) = self.subdirectories.insert(name.into(), child) {
            self.total = Self::subtract(self.total, previous.total);
        }
        self.total += child_total;
    }

    /// Folds a total into this node without retaining where it came from.
    ///
    /// Used when detail is not kept; a node built this way no longer
    /// satisfies [`is_consistent`](Self::is_consistent).
    pub fn fold_total(&mut self, total: FileStats) {
        self.total += total;
    }

    #[must_use]
    pub const fn total(&self) -> FileStats {
        self.total
    }

    #[must_use]
    pub const fn files(&self) -> &BTreeMap<String, FileStats> {
        &self.files
    }

    #[must_use]
    pub const fn subdirectories(&self) -> &BTreeMap<String, DirectoryStats> {
        &self.subdirectories
    }

    /// Number of files recorded in this subtree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .values()
                .map(Self::file_count)
                .sum::<usize>()
    }

    /// Checks the summation law at this node and every descendant.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let own: FileStats = self.files.values().copied().sum();
        let nested: FileStats = self.subdirectories.values().map(Self::total).sum();
        self.total == own + nested && self.subdirectories.values().all(Self::is_consistent)
    }

    /// Visits every recorded file depth-first, files of a node before its
    /// subdirectories, passing the directory path segments from the root.
    pub fn visit_files<F>(&self, mut visit: F)
    where
        F: FnMut(&[&str], &str, &FileStats),
    {
        let mut path = alloc::vec::Vec::new();
        self.visit_inner(&mut path, &mut visit);
    }

    fn visit_inner<'a, F>(&'a self, path: &mut alloc::vec::Vec<&'a str>, visit: &mut F)
    where
        F: FnMut(&[&str], &str, &FileStats),
    {
        for (name, stats) in &self.files {
            visit(path.as_slice(), name.as_str(), stats);
        }
        for (name, child) in &self.subdirectories {
            path.push(name);
            child.visit_inner(path, visit);
            path.pop();
        }
    }

    const fn subtract(total: FileStats, removed: FileStats) -> FileStats {
        FileStats::new(
            total.code_lines - removed.code_lines,
            total.total_lines - removed.total_lines,
        )
    }
}

/// 走査結果
///
/// Verbose runs keep the whole tree; the summary form keeps only the root's
/// cumulative total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanReport {
    Detailed(DirectoryStats),
    Summary(FileStats),
}

impl ScanReport {
    #[must_use]
    pub const fn total(&self) -> FileStats {
        match self {
            Self::Detailed(tree) => tree.total(),
            Self::Summary(total) => *total,
        }
    }

    #[must_use]
    pub const fn tree(&self) -> Option<&DirectoryStats> {
        match self {
            Self::Detailed(tree) => Some(tree),
            Self::Summary(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn test_file_stats_arithmetic() {
        let a = FileStats::new(2, 5);
        let b = FileStats::new(3, 3);
        assert_eq!(a + b, FileStats::new(5, 8));
        assert_eq!([a, b].into_iter().sum::<FileStats>(), FileStats::new(5, 8));
        assert_eq!(a.non_code_lines(), 3);
    }

    #[test]
    fn test_directory_totals() {
        let mut root = DirectoryStats::new();
        root.add_file("a.py", FileStats::new(2, 5));
        root.add_file("b.py", FileStats::new(3, 3));
        assert_eq!(root.total(), FileStats::new(5, 8));

        root.add_subdirectory("empty", DirectoryStats::new());
        assert_eq!(root.total(), FileStats::new(5, 8));

        let mut child = DirectoryStats::new();
        child.add_file("c.py", FileStats::new(1, 2));
        root.add_subdirectory("src", child);
        assert_eq!(root.total(), FileStats::new(6, 10));
        assert_eq!(root.file_count(), 3);
        assert!(root.is_consistent());
    }

    #[test]
    fn test_replacing_entries_keeps_sum() {
        let mut root = DirectoryStats::new();
        root.add_file("a.rs", FileStats::new(4, 4));
        root.add_file("a.rs", FileStats::new(1, 2));
        assert_eq!(root.total(), FileStats::new(1, 2));
        assert!(root.is_consistent());
    }

    #[test]
    fn test_fold_total_breaks_detail_only() {
        let mut root = DirectoryStats::new();
        root.fold_total(FileStats::new(1, 1));
        assert_eq!(root.total(), FileStats::new(1, 1));
        assert!(!root.is_consistent());
    }

    #[test]
    fn test_visit_files_order() {
        let mut inner = DirectoryStats::new();
        inner.add_file("z.rs", FileStats::new(1, 1));
        let mut root = DirectoryStats::new();
        root.add_subdirectory("src", inner);
        root.add_file("b.rs", FileStats::new(1, 1));
        root.add_file("a.rs", FileStats::new(1, 1));

        let mut seen = Vec::new();
        root.visit_files(|dirs, name, _| {
            let mut path = dirs.join("/");
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(name);
            seen.push(path);
        });
        assert_eq!(seen, ["a.rs", "b.rs", "src/z.rs"].map(ToString::to_string));
    }

    #[test]
    fn test_report_total() {
        let summary = ScanReport::Summary(FileStats::new(1, 2));
        assert_eq!(summary.total(), FileStats::new(1, 2));
        assert!(summary.tree().is_none());
    }
}
