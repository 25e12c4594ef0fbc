// crates/cli/src/presentation.rs
use crate::error::{AppError, Result};
use crate::options::OutputFormat;
use chrono::Local;
use cloc_core::{DirectoryStats, FileStats, ScanReport};
use rusqlite::{Connection, params};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const TIME_FORMAT: &str = "%d/%m/%y, at %H:%M:%S";

/// 実行全体の集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct General {
    pub loc: usize,
    pub total: usize,
    pub time: String,
    pub platform: String,
}

impl General {
    #[must_use]
    pub fn now(total: FileStats) -> Self {
        Self {
            loc: total.code_lines,
            total: total.total_lines,
            time: Local::now().format(TIME_FORMAT).to_string(),
            platform: std::env::consts::OS.to_string(),
        }
    }
}

/// 出力ドキュメント。verbose の時だけツリーを持つ
#[derive(Debug, Serialize)]
pub struct Document<'a> {
    pub general: General,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<&'a DirectoryStats>,
}

impl<'a> Document<'a> {
    #[must_use]
    pub fn new(general: General, report: &'a ScanReport) -> Self {
        Self {
            general,
            tree: report.tree(),
        }
    }

    /// Per-file rows, directories relative to the root joined with `/`.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        if let Some(tree) = self.tree {
            tree.visit_files(|dirs, name, stats| {
                rows.push(Row {
                    directory: directory_label(dirs),
                    file: name.to_string(),
                    stats: *stats,
                });
            });
        }
        rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub directory: String,
    pub file: String,
    pub stats: FileStats,
}

fn directory_label(dirs: &[&str]) -> String {
    if dirs.is_empty() {
        ".".to_string()
    } else {
        dirs.join("/")
    }
}

/// Writes the document to `output`, or to stdout when there is none.
///
/// # Errors
///
/// Returns [`AppError::Usage`] for SQLite output without a file, and IO or
/// serialization errors from the writers.
pub fn emit(document: &Document<'_>, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    match (format, output) {
        (OutputFormat::Sqlite, Some(path)) => write_sqlite(document, path),
        (OutputFormat::Sqlite, None) => Err(AppError::Usage(
            "SQLite output requires --output".to_string(),
        )),
        (format, Some(path)) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_document(document, format, &mut out)?;
            out.flush()?;
            log::info!("wrote {format:?} output to {}", path.display());
            Ok(())
        }
        (format, None) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_document(document, format, &mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}

/// Streamable formats.
///
/// # Errors
///
/// IO and serialization errors.
pub fn write_document<W: Write>(
    document: &Document<'_>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(document, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, document)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, document)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(document, out),
        OutputFormat::Sqlite => Err(AppError::Usage(
            "SQLite output cannot be streamed".to_string(),
        )),
    }
}

fn write_text<W: Write>(document: &Document<'_>, out: &mut W) -> Result<()> {
    let g = &document.general;
    writeln!(out, "loc : {}", g.loc)?;
    writeln!(out, "total : {}", g.total)?;
    writeln!(out, "time : {}", g.time)?;
    writeln!(out, "platform : {}", g.platform)?;

    if document.tree.is_none() {
        return Ok(());
    }

    writeln!(out, "{}", "=".repeat(15))?;
    let mut current: Option<String> = None;
    for row in document.rows() {
        if current.as_deref() != Some(row.directory.as_str()) {
            writeln!(out, "{}", row.directory)?;
            current = Some(row.directory.clone());
        }
        writeln!(
            out,
            "\t{}:LOC: {} Total: {}",
            row.file, row.stats.code_lines, row.stats.total_lines
        )?;
    }
    Ok(())
}

fn write_csv<W: Write>(document: &Document<'_>, out: &mut W) -> Result<()> {
    let g = &document.general;
    writeln!(out, "loc,total,time,platform")?;
    writeln!(
        out,
        "{},{},{},{}",
        g.loc,
        g.total,
        csv_field(&g.time),
        csv_field(&g.platform)
    )?;

    if document.tree.is_none() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "DIRECTORY,FILE,LOC,TOTAL")?;
    for row in document.rows() {
        writeln!(
            out,
            "{},{},{},{}",
            csv_field(&row.directory),
            csv_field(&row.file),
            row.stats.code_lines,
            row.stats.total_lines
        )?;
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// `general` と `file_data` の2テーブル。既存の行は置き換える
fn write_sqlite(document: &Document<'_>, path: &Path) -> Result<()> {
    let mut conn = Connection::open(path)?;
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         CREATE TABLE IF NOT EXISTS general (
             LOC INTEGER DEFAULT 0,
             total_lines INTEGER DEFAULT 0,
             time DATETIME,
             platform VARCHAR(32)
         );
         CREATE TABLE IF NOT EXISTS file_data (
             ID INTEGER PRIMARY KEY AUTOINCREMENT,
             directory VARCHAR(1024) NOT NULL,
             _name VARCHAR(1024) NOT NULL,
             LOC INTEGER DEFAULT 0,
             total_lines INTEGER DEFAULT 0
         );",
    )?;

    let tx = conn.transaction()?;
    tx.execute("DELETE FROM general", [])?;
    tx.execute("DELETE FROM file_data", [])?;

    let g = &document.general;
    tx.execute(
        "INSERT INTO general VALUES (?1, ?2, ?3, ?4)",
        params![sql_int(g.loc), sql_int(g.total), g.time, g.platform],
    )?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO file_data (directory, _name, LOC, total_lines) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for row in document.rows() {
            stmt.execute(params![
                row.directory,
                row.file,
                sql_int(row.stats.code_lines),
                sql_int(row.stats.total_lines)
            ])?;
        }
    }

    tx.commit()?;
    log::info!("wrote SQLite output to {}", path.display());
    Ok(())
}

fn sql_int(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
