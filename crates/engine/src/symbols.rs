//! Extension tables loaded at runtime.
//!
//! The document shape is the `languages.json` layout:
//!
//! ```json
//! {
//!   "symbols":    { "py": "#", "rs": "//" },
//!   "multilined": { "rs": "/* */", "html": "<!-- -->" }
//! }
//! ```
//!
//! Every entry is validated when the table is built, so a malformed pair is a
//! configuration error before any file is scanned.

use crate::error::{EngineError, Result};
use cloc_core::language::SymbolResolver;
use cloc_core::{CommentSyntax, ResolutionError};
use hashbrown::HashMap;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct TableDocument {
    #[serde(default)]
    symbols: HashMap<String, String>,
    #[serde(default)]
    multilined: HashMap<String, String>,
}

/// JSON から読み込んだ拡張子テーブル
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: HashMap<String, CommentSyntax>,
}

impl SymbolTable {
    /// Reads and validates a table file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] when the file cannot be read, and
    /// [`EngineError::Json`] or [`EngineError::Configuration`] when it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let table = Self::from_json(&text)?;
        log::info!(
            "loaded {} extensions from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parses and validates a table document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] naming the first offending
    /// extension when an entry is malformed.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: TableDocument = serde_json::from_str(text)?;

        let extensions: BTreeSet<String> = doc
            .symbols
            .keys()
            .chain(doc.multilined.keys())
            .map(|ext| ext.to_ascii_lowercase())
            .collect();
        let lowered = |map: &HashMap<String, String>| -> HashMap<String, String> {
            map.iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.clone()))
                .collect()
        };
        let symbols = lowered(&doc.symbols);
        let multilined = lowered(&doc.multilined);

        let mut entries = HashMap::with_capacity(extensions.len());
        for ext in extensions {
            let single = symbols.get(&ext).map(|s| s.trim().as_bytes());
            let multi = multilined
                .get(&ext)
                .map(|pair| CommentSyntax::parse_pair(pair))
                .transpose()
                .map_err(|e| invalid_entry(&ext, &e))?;
            let syntax =
                CommentSyntax::from_parts(single, multi).map_err(|e| invalid_entry(&ext, &e))?;
            entries.insert(ext, syntax);
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn invalid_entry(ext: &str, err: &dyn std::fmt::Display) -> EngineError {
    EngineError::Configuration(format!("extension '.{ext}': {err}"))
}

impl SymbolResolver for SymbolTable {
    fn resolve(&self, extension: &str) -> std::result::Result<CommentSyntax, ResolutionError> {
        self.entries
            .get(&extension.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| ResolutionError::new(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_builds_all_shapes() {
        let table = SymbolTable::from_json(
            r##"{
                "symbols": {"py": "#", "rs": "//"},
                "multilined": {"rs": "/* */", "HTML": "<!-- -->"}
            }"##,
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert!(matches!(
            table.resolve("py"),
            Ok(CommentSyntax::SingleOnly { .. })
        ));
        assert!(matches!(table.resolve("rs"), Ok(CommentSyntax::Both { .. })));
        assert!(matches!(
            table.resolve("html"),
            Ok(CommentSyntax::MultiOnly { .. })
        ));
        assert!(table.resolve("go").is_err());
    }

    #[test]
    fn test_half_pair_is_configuration_error() {
        let err = SymbolTable::from_json(r#"{"multilined": {"c": "/*"}}"#).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(msg) if msg.contains(".c")));
    }

    #[test]
    fn test_empty_symbol_is_configuration_error() {
        let err = SymbolTable::from_json(r#"{"symbols": {"sh": "  "}}"#).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            SymbolTable::from_json("{"),
            Err(EngineError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        std::fs::write(&path, r#"{"symbols": {"txt": ">"}}"#).unwrap();
        let table = SymbolTable::load(&path).unwrap();
        assert!(table.resolve("TXT").is_ok());
    }
}
