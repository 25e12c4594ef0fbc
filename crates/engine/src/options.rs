use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lines per batch when none is given.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// 走査対象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

impl Default for Target {
    fn default() -> Self {
        Self::Directory(PathBuf::from("."))
    }
}

/// ディレクトリの辿り方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Traversal {
    /// 再帰呼び出し
    #[default]
    Recursive,
    /// 明示的なスタック（深い木でもスタックを消費しない）
    WorkList,
}

/// ファイル内の行の分類方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMode {
    /// 1行ずつ
    Sequential,
    /// N行ずつまとめて
    Batched(usize),
}

impl Default for ScanMode {
    fn default() -> Self {
        Self::Batched(DEFAULT_BATCH_SIZE)
    }
}
