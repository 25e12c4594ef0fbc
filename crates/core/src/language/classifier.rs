//! # Symbol-based line classifier
//!
//! Decides whether one physical line carries code, given the comment syntax of
//! its language and whether a block comment is open when the line starts.
//!
//! ## Rules
//!
//! - Blank lines (after trimming ASCII whitespace and vertical tab) are never
//!   code and keep the state.
//! - A trimmed line starting with the single-line symbol is a comment; the
//!   multi-line scan is skipped for it.
//! - Otherwise the line is scanned left to right. Block start and end symbols
//!   toggle the open flag, a single-line symbol ends the scan, and any
//!   non-whitespace byte seen while the block is closed makes the line code.
//! - The open flag is a boolean, not a depth counter.
//!
//! String literals are not recognised: `"/*"` opens a block like any other `/*`.
//!
//! ```rust
//! use cloc_core::language::classifier::{ScanState, classify};
//! use cloc_core::syntax::CommentSyntax;
//!
//! let c = CommentSyntax::from_parts(Some(&b"//"[..]), Some((&b"/*"[..], &b"*/"[..]))).unwrap();
//! let (code, state) = classify(b"int x; /* open", &c, ScanState::default());
//! assert!(code);
//! assert!(state.inside_block);
//! ```

use crate::syntax::CommentSyntax;

/// ファイル単位の走査状態
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    /// ブロックコメントが開いているか
    pub inside_block: bool,
}

impl ScanState {
    #[must_use]
    pub const fn new(inside_block: bool) -> Self {
        Self { inside_block }
    }
}

/// Classifies one line. Returns whether it is code and the state to carry into
/// the next line.
#[must_use]
pub fn classify(line: &[u8], syntax: &CommentSyntax, state: ScanState) -> (bool, ScanState) {
    let line = trim_blank(line);
    if line.is_empty() {
        return (false, state);
    }

    let single = syntax.single();
    if single.is_some_and(|s| line.starts_with(s)) {
        return (false, state);
    }

    match syntax.multi() {
        Some((start, end)) => scan_block_symbols(line, single, start, end, state),
        None => (true, state),
    }
}

fn scan_block_symbols(
    line: &[u8],
    single: Option<&[u8]>,
    start: &[u8],
    end: &[u8],
    state: ScanState,
) -> (bool, ScanState) {
    let mut inside = state.inside_block;
    let mut is_code = false;
    let mut idx = 0;

    while idx < line.len() {
        let rest = &line[idx..];

        if rest.starts_with(start) {
            inside = true;
            idx += start.len();
            continue;
        }
        if rest.starts_with(end) {
            inside = false;
            idx += end.len();
            continue;
        }
        if single.is_some_and(|s| rest.starts_with(s)) {
            break;
        }
        if !inside && !is_blank(line[idx]) {
            is_code = true;
        }
        idx += 1;
    }

    (is_code, ScanState::new(inside))
}

/// `is_ascii_whitespace` に垂直タブ (0x0b) を加えたもの
const fn is_blank(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

fn trim_blank(line: &[u8]) -> &[u8] {
    let Some(first) = line.iter().position(|&b| !is_blank(b)) else {
        return &[];
    };
    let last = line.iter().rposition(|&b| !is_blank(b)).unwrap_or(first);
    &line[first..=last]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_style() -> CommentSyntax {
        CommentSyntax::from_parts(Some(&b"//"[..]), Some((&b"/*"[..], &b"*/"[..]))).unwrap()
    }

    fn hash() -> CommentSyntax {
        CommentSyntax::from_parts(Some(&b"#"[..]), None).unwrap()
    }

    fn html() -> CommentSyntax {
        CommentSyntax::from_parts(None, Some((&b"<!--"[..], &b"-->"[..]))).unwrap()
    }

    const CLOSED: ScanState = ScanState::new(false);
    const OPEN: ScanState = ScanState::new(true);

    #[test]
    fn test_blank_lines_keep_state() {
        for syntax in [c_style(), hash(), html()] {
            assert_eq!(classify(b"", &syntax, CLOSED), (false, CLOSED));
            assert_eq!(classify(b"  \t \r\n", &syntax, OPEN), (false, OPEN));
            assert_eq!(classify(b" \x0b \x0c\n", &syntax, CLOSED), (false, CLOSED));
        }
    }

    #[test]
    fn test_single_line_only() {
        let s = hash();
        assert_eq!(classify(b"a = 1", &s, CLOSED), (true, CLOSED));
        assert_eq!(classify(b"   # comment", &s, CLOSED), (false, CLOSED));
        // 行頭以外の記号は無視される
        assert_eq!(classify(b"a = 1 # trailing", &s, CLOSED), (true, CLOSED));
    }

    #[test]
    fn test_single_symbol_at_line_start_skips_block_scan() {
        let s = c_style();
        assert_eq!(classify(b"// /* not opened", &s, CLOSED), (false, CLOSED));
        assert_eq!(classify(b"// */ not closed", &s, OPEN), (false, OPEN));
    }

    #[test]
    fn test_block_open_and_close() {
        let s = c_style();
        assert_eq!(classify(b"/* start", &s, CLOSED), (false, OPEN));
        assert_eq!(classify(b"still comment", &s, OPEN), (false, OPEN));
        assert_eq!(classify(b"end */ int y;", &s, OPEN), (true, CLOSED));
        assert_eq!(classify(b"end */", &s, OPEN), (false, CLOSED));
    }

    #[test]
    fn test_code_before_block_start() {
        let s = c_style();
        assert_eq!(classify(b"int x; /* open", &s, CLOSED), (true, OPEN));
    }

    #[test]
    fn test_inline_block_is_not_code() {
        let s = c_style();
        assert_eq!(classify(b"/* a */", &s, CLOSED), (false, CLOSED));
        assert_eq!(classify(b"/* a */ /* b */", &s, CLOSED), (false, CLOSED));
        assert_eq!(classify(b"/* a */ x", &s, CLOSED), (true, CLOSED));
        assert_eq!(classify(b"/* a */\x0b/* b */", &s, CLOSED), (false, CLOSED));
    }

    #[test]
    fn test_code_verdict_does_not_revert() {
        let s = c_style();
        assert_eq!(classify(b"x /* y */ // z", &s, CLOSED), (true, CLOSED));
    }

    #[test]
    fn test_trailing_single_symbol_stops_scan() {
        let s = c_style();
        assert_eq!(classify(b"x = 1; // /* ignored", &s, CLOSED), (true, CLOSED));
    }

    #[test]
    fn test_single_symbol_inside_open_block_stops_scan() {
        // ブロック内でも単一行記号以降は走査しないため、閉じ記号は見られない
        let s = c_style();
        assert_eq!(classify(b"text // then */ code", &s, OPEN), (false, OPEN));
    }

    #[test]
    fn test_repeated_markers_are_idempotent() {
        let s = c_style();
        assert_eq!(classify(b"/* /* nested", &s, CLOSED), (false, OPEN));
        assert_eq!(classify(b"/* again", &s, OPEN), (false, OPEN));
        assert_eq!(classify(b"*/ */", &s, OPEN), (false, CLOSED));
        assert_eq!(classify(b"x */", &s, CLOSED), (true, CLOSED));
    }

    #[test]
    fn test_multi_only_syntax() {
        let s = html();
        assert_eq!(classify(b"<div>", &s, CLOSED), (true, CLOSED));
        assert_eq!(classify(b"<!-- note -->", &s, CLOSED), (false, CLOSED));
        assert_eq!(classify(b"<!-- open", &s, CLOSED), (false, OPEN));
        assert_eq!(classify(b"--> <p>", &s, OPEN), (true, CLOSED));
    }

    #[test]
    fn test_arbitrary_bytes_do_not_panic() {
        let s = c_style();
        let line = [0xff, 0xfe, b'/', b'*', 0x00, 0x80];
        assert_eq!(classify(&line, &s, CLOSED), (true, OPEN));
    }
}
