pub mod classifier;
pub mod processor;
pub mod processor_trait;
pub mod table;

pub use classifier::{ScanState, classify};
pub use processor::SymbolProcessor;
pub use processor_trait::LineProcessor;

use alloc::string::String;
use hashbrown::HashMap;

use crate::error::ResolutionError;
use crate::syntax::CommentSyntax;
use table::{LANGUAGES, LanguageEntry};

/// 拡張子からコメント構文を解決する
pub trait SymbolResolver {
    /// Resolves the comment syntax for a file extension (without the dot).
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] when the extension is unknown.
    fn resolve(&self, extension: &str) -> Result<CommentSyntax, ResolutionError>;
}

impl<R: SymbolResolver + ?Sized> SymbolResolver for &R {
    fn resolve(&self, extension: &str) -> Result<CommentSyntax, ResolutionError> {
        (**self).resolve(extension)
    }
}

/// ファイル名から拡張子を取り出す
///
/// Text after the last `.`; a name without a dot is its own extension so that
/// files such as `Makefile` can still be keyed.
#[must_use]
pub fn extension_of(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(_, ext)| ext)
}

/// 組み込みテーブルによる解決
#[derive(Debug, Clone)]
pub struct BuiltinTable {
    index: HashMap<&'static str, &'static LanguageEntry>,
}

impl Default for BuiltinTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinTable {
    #[must_use]
    pub fn new() -> Self {
        let index = LANGUAGES
            .iter()
            .flat_map(|language| language.extensions.iter().map(move |ext| (*ext, language)))
            .collect();
        Self { index }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl SymbolResolver for BuiltinTable {
    fn resolve(&self, extension: &str) -> Result<CommentSyntax, ResolutionError> {
        let key: String = extension.to_ascii_lowercase();
        let language = self
            .index
            .get(key.as_str())
            .ok_or_else(|| ResolutionError::new(extension))?;

        CommentSyntax::from_parts(
            language.single.map(str::as_bytes),
            language.multi.map(|(start, end)| (start.as_bytes(), end.as_bytes())),
        )
        .map_err(|_| ResolutionError::new(extension))
    }
}
