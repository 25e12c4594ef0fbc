use crate::error::{EngineError, Result};
use crate::options::ScanMode;
use cloc_core::batch::scan_batch;
use cloc_core::language::{LineProcessor, SymbolProcessor};
use cloc_core::{CommentSyntax, FileStats};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scan one file and return its line counts.
///
/// The file is read as raw bytes, line by line, and closed when this function
/// returns on any path.
///
/// # Errors
///
/// Returns [`EngineError::FileAccess`] if the file cannot be opened or read.
pub fn scan_file(path: &Path, syntax: &CommentSyntax, mode: ScanMode) -> Result<FileStats> {
    let file = File::open(path).map_err(|e| file_access(path, e))?;
    let mut reader = BufReader::new(file);

    let stats = match mode {
        ScanMode::Sequential => scan_sequential(&mut reader, syntax),
        ScanMode::Batched(size) => scan_batched(&mut reader, syntax, size.max(1)),
    }
    .map_err(|e| file_access(path, e))?;

    log::debug!(
        "{}: {} code / {} total",
        path.display(),
        stats.code_lines,
        stats.total_lines
    );
    Ok(stats)
}

/// 1行ずつ分類する
fn scan_sequential<R: BufRead>(reader: &mut R, syntax: &CommentSyntax) -> std::io::Result<FileStats> {
    let mut processor = SymbolProcessor::new(syntax.clone());
    let mut stats = FileStats::default();
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        stats.total_lines += 1;
        stats.code_lines += processor.process_line(&line_buf);
    }

    Ok(stats)
}

/// `batch_size` 行ずつまとめて分類する
fn scan_batched<R: BufRead>(
    reader: &mut R,
    syntax: &CommentSyntax,
    batch_size: usize,
) -> std::io::Result<FileStats> {
    let mut stats = FileStats::default();
    let mut inside_block = false;
    let mut batch: Vec<Vec<u8>> = Vec::with_capacity(batch_size);

    loop {
        batch.clear();
        while batch.len() < batch_size {
            let mut line = Vec::new();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            batch.push(line);
        }
        if batch.is_empty() {
            break;
        }

        let scan = scan_batch(&batch, inside_block, syntax);
        inside_block = scan.inside_block;
        stats.code_lines += scan.code_lines;
        stats.total_lines += batch.len();
    }

    Ok(stats)
}

fn file_access(path: &Path, source: std::io::Error) -> EngineError {
    EngineError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}
