use alloc::string::String;
use thiserror::Error;

/// コメント構文の定義エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("no comment symbols given")]
    Missing,

    #[error("comment symbol must not be empty")]
    EmptySymbol,

    #[error("multi-line symbols must be a space-separated pair, got '{0}'")]
    MalformedPair(String),
}

/// 拡張子からコメント構文を解決できなかった
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no comment symbols found for extension '.{extension}'")]
pub struct ResolutionError {
    pub extension: String,
}

impl ResolutionError {
    #[must_use]
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}
