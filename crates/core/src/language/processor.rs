use super::classifier::{ScanState, classify};
use super::processor_trait::LineProcessor;
use crate::syntax::CommentSyntax;

/// 記号ベースのプロセッサ
///
/// Carries a [`ScanState`] from line to line on top of [`classify`].
#[derive(Debug, Clone)]
pub struct SymbolProcessor {
    syntax: CommentSyntax,
    state: ScanState,
}

impl SymbolProcessor {
    #[must_use]
    pub const fn new(syntax: CommentSyntax) -> Self {
        Self {
            syntax,
            state: ScanState { inside_block: false },
        }
    }
}

impl LineProcessor for SymbolProcessor {
    fn process_line(&mut self, line: &[u8]) -> usize {
        let (is_code, next) = classify(line, &self.syntax, self.state);
        self.state = next;
        usize::from(is_code)
    }

    fn reset(&mut self) {
        self.state = ScanState::default();
    }

    fn is_in_block_comment(&self) -> bool {
        self.state.inside_block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_threads_across_lines() {
        let syntax =
            CommentSyntax::from_parts(Some(&b"//"[..]), Some((&b"/*"[..], &b"*/"[..]))).unwrap();
        let mut proc = SymbolProcessor::new(syntax);

        assert_eq!(proc.process_line(b"int x;"), 1);
        assert_eq!(proc.process_line(b"/* start"), 0);
        assert!(proc.is_in_block_comment());
        assert_eq!(proc.process_line(b"still comment"), 0);
        assert_eq!(proc.process_line(b"end */ int y;"), 1);
        assert!(!proc.is_in_block_comment());
    }

    #[test]
    fn test_reset_closes_block() {
        let syntax = CommentSyntax::from_parts(None, Some((&b"/*"[..], &b"*/"[..]))).unwrap();
        let mut proc = SymbolProcessor::new(syntax);
        proc.process_line(b"/* open");
        proc.reset();
        assert_eq!(proc.process_line(b"fn test() {}"), 1);
    }
}
