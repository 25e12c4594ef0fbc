use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key : value` 形式のテキスト
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
    /// SQLite データベース
    Sqlite,
}

impl OutputFormat {
    /// Picks a format from the output file's extension. Unknown or missing
    /// extensions fall back to text.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            Some("csv") => Self::Csv,
            Some("db" | "sql" | "sqlite") => Self::Sqlite,
            _ => Self::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("out.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("out.YML")), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_path(Path::new("out.csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("counts.db")), OutputFormat::Sqlite);
        assert_eq!(OutputFormat::from_path(Path::new("counts.sql")), OutputFormat::Sqlite);
        assert_eq!(OutputFormat::from_path(Path::new("run.log")), OutputFormat::Text);
        assert_eq!(OutputFormat::from_path(Path::new("report")), OutputFormat::Text);
    }
}
