//! 行処理トレイト
//!
//! Common interface for stateful line processors. A processor owns the scan
//! state of exactly one file and must be [`reset`](LineProcessor::reset) (or
//! recreated) before it is reused for another.
//!
//! # Example
//!
//! ```rust
//! use cloc_core::language::processor_trait::LineProcessor;
//!
//! struct Plain;
//!
//! impl LineProcessor for Plain {
//!     fn process_line(&mut self, line: &[u8]) -> usize {
//!         usize::from(!line.trim_ascii().is_empty())
//!     }
//! }
//!
//! assert_eq!(Plain.process_line(b"x"), 1);
//! ```

use alloc::boxed::Box;

/// 行処理トレイト
pub trait LineProcessor: Send {
    /// 行を処理し、コード行なら `1`、コメント/空行なら `0` を返す
    fn process_line(&mut self, line: &[u8]) -> usize;

    /// 処理状態をリセット
    fn reset(&mut self) {}

    /// 現在ブロックコメント内かどうか
    fn is_in_block_comment(&self) -> bool {
        false
    }
}

impl LineProcessor for Box<dyn LineProcessor> {
    fn process_line(&mut self, line: &[u8]) -> usize {
        (**self).process_line(line)
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn is_in_block_comment(&self) -> bool {
        (**self).is_in_block_comment()
    }
}
