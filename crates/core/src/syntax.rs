//! コメント構文の定義
//!
//! A language is described by an optional single-line symbol and an optional
//! multi-line `(start, end)` pair. At least one of the two must be present, so
//! the three legal shapes are modelled as variants instead of two `Option`s.

use alloc::vec::Vec;

use crate::error::SyntaxError;

/// コメント構文
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommentSyntax {
    /// 単一行コメントのみ (e.g. `#`)
    SingleOnly { single: Vec<u8> },
    /// ブロックコメントのみ (e.g. `<!--` `-->`)
    MultiOnly { start: Vec<u8>, end: Vec<u8> },
    /// 両方 (e.g. `//` と `/* */`)
    Both {
        single: Vec<u8>,
        start: Vec<u8>,
        end: Vec<u8>,
    },
}

impl CommentSyntax {
    /// Builds a syntax from its optional parts.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::Missing`] when neither form is given and
    /// [`SyntaxError::EmptySymbol`] when any given symbol is empty.
    pub fn from_parts(
        single: Option<&[u8]>,
        multi: Option<(&[u8], &[u8])>,
    ) -> Result<Self, SyntaxError> {
        let non_empty = |s: &[u8]| {
            if s.is_empty() {
                Err(SyntaxError::EmptySymbol)
            } else {
                Ok(s.to_vec())
            }
        };

        match (single, multi) {
            (None, None) => Err(SyntaxError::Missing),
            (Some(single), None) => Ok(Self::SingleOnly {
                single: non_empty(single)?,
            }),
            (None, Some((start, end))) => Ok(Self::MultiOnly {
                start: non_empty(start)?,
                end: non_empty(end)?,
            }),
            (Some(single), Some((start, end))) => Ok(Self::Both {
                single: non_empty(single)?,
                start: non_empty(start)?,
                end: non_empty(end)?,
            }),
        }
    }

    /// Parses a multi-line pair written as `"start end"`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::MalformedPair`] unless the text holds exactly two
    /// whitespace-separated symbols.
    pub fn parse_pair(text: &str) -> Result<(&[u8], &[u8]), SyntaxError> {
        let mut parts = text.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => Ok((start.as_bytes(), end.as_bytes())),
            _ => Err(SyntaxError::MalformedPair(text.into())),
        }
    }

    #[must_use]
    pub fn single(&self) -> Option<&[u8]> {
        match self {
            Self::SingleOnly { single } | Self::Both { single, .. } => Some(single.as_slice()),
            Self::MultiOnly { .. } => None,
        }
    }

    #[must_use]
    pub fn multi(&self) -> Option<(&[u8], &[u8])> {
        match self {
            Self::MultiOnly { start, end } | Self::Both { start, end, .. } => {
                Some((start.as_slice(), end.as_slice()))
            }
            Self::SingleOnly { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_shapes() {
        let s = CommentSyntax::from_parts(Some(&b"#"[..]), None).unwrap();
        assert_eq!(s.single(), Some(&b"#"[..]));
        assert_eq!(s.multi(), None);

        let m = CommentSyntax::from_parts(None, Some((&b"<!--"[..], &b"-->"[..]))).unwrap();
        assert_eq!(m.single(), None);
        assert_eq!(m.multi(), Some((&b"<!--"[..], &b"-->"[..])));

        let b = CommentSyntax::from_parts(Some(&b"//"[..]), Some((&b"/*"[..], &b"*/"[..]))).unwrap();
        assert!(matches!(b, CommentSyntax::Both { .. }));
    }

    #[test]
    fn test_from_parts_rejects_missing_and_empty() {
        assert_eq!(
            CommentSyntax::from_parts(None, None),
            Err(SyntaxError::Missing)
        );
        assert_eq!(
            CommentSyntax::from_parts(Some(&b""[..]), None),
            Err(SyntaxError::EmptySymbol)
        );
        assert_eq!(
            CommentSyntax::from_parts(None, Some((&b"/*"[..], &b""[..]))),
            Err(SyntaxError::EmptySymbol)
        );
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            CommentSyntax::parse_pair(" /* */ "),
            Ok((&b"/*"[..], &b"*/"[..]))
        );
        assert!(matches!(
            CommentSyntax::parse_pair("/*"),
            Err(SyntaxError::MalformedPair(_))
        ));
        assert!(matches!(
            CommentSyntax::parse_pair("/* */ extra"),
            Err(SyntaxError::MalformedPair(_))
        ));
    }
}
