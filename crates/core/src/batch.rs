//! Batched classification.
//!
//! Classifies a group of lines in one call, carrying the open-block flag in and
//! out. Splitting a file into batches at any point gives the same counts and
//! the same final flag as classifying every line in sequence.

use crate::language::classifier::{ScanState, classify};
use crate::syntax::CommentSyntax;

/// バッチ走査の結果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchScan {
    /// バッチ終了時にブロックコメントが開いているか
    pub inside_block: bool,
    /// バッチ内のコード行数
    pub code_lines: usize,
}

#[must_use]
pub fn scan_batch<L: AsRef<[u8]>>(
    lines: &[L],
    inside_block: bool,
    syntax: &CommentSyntax,
) -> BatchScan {
    let mut state = ScanState::new(inside_block);
    let mut code_lines = 0;

    for line in lines {
        let (is_code, next) = classify(line.as_ref(), syntax, state);
        state = next;
        code_lines += usize::from(is_code);
    }

    BatchScan {
        inside_block: state.inside_block,
        code_lines,
    }
}
