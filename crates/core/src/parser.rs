use memchr::memchr_iter;

use crate::language::classifier::{ScanState, classify};
use crate::stats::FileStats;
use crate::syntax::CommentSyntax;

/// Splits raw bytes into physical lines.
///
/// Each yielded line keeps its `\n` terminator. A trailing segment without a
/// terminator is yielded as a final line; empty input yields nothing.
pub fn physical_lines(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut start = 0;
    let mut ends = memchr_iter(b'\n', input);
    core::iter::from_fn(move || {
        if let Some(end) = ends.next() {
            let line = &input[start..=end];
            start = end + 1;
            Some(line)
        } else if start < input.len() {
            let line = &input[start..];
            start = input.len();
            Some(line)
        } else {
            None
        }
    })
}

/// Count code and total lines in a byte slice.
///
/// In-memory counterpart of the file scanner: one [`ScanState`] threads
/// through every line and is dropped at the end.
#[must_use]
pub fn count_bytes(input: &[u8], syntax: &CommentSyntax) -> FileStats {
    let (stats, _) = count_lines(physical_lines(input), syntax, ScanState::default());
    stats
}

/// Counts an arbitrary sequence of lines, returning the final state as well.
pub fn count_lines<'a, I>(lines: I, syntax: &CommentSyntax, state: ScanState) -> (FileStats, ScanState)
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut stats = FileStats::default();
    let mut state = state;

    for line in lines {
        let (is_code, next) = classify(line, syntax, state);
        state = next;
        stats.total_lines += 1;
        if is_code {
            stats.code_lines += 1;
        }
    }

    (stats, state)
}
