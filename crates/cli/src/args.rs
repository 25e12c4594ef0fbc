// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "cloc",
    version = crate::VERSION,
    about = "コード行数 (LOC) と総行数の集計ツール",
    group(
        clap::ArgGroup::new("target")
            .args(["dir", "file"])
            .required(true)
            .multiple(false)
    )
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 走査するディレクトリ
    #[arg(short, long, value_hint = ValueHint::DirPath, help_heading = "対象")]
    pub dir: Option<PathBuf>,

    /// 走査するファイル
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "対象")]
    pub file: Option<PathBuf>,

    /// 単一行コメント記号（指定すると全ファイルに適用、拡張子による判定を行わない）
    #[arg(long, visible_alias = "ss", help_heading = "コメント記号")]
    pub single_symbol: Option<String>,

    /// 複数行コメント記号の組（空白区切り, 例: "/* */"）
    #[arg(long, visible_alias = "ms", help_heading = "コメント記号")]
    pub multiline_symbol: Option<String>,

    /// 拡張子テーブル (JSON: {"symbols": {..}, "multilined": {..}})
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "コメント記号")]
    pub languages: Option<PathBuf>,

    /// 除外するファイル名（glob 可, 複数指定可）
    #[arg(long, visible_alias = "xf", num_args = 1.., help_heading = "フィルタ")]
    pub exclude_file: Vec<String>,

    /// 除外する拡張子（複数指定可）
    #[arg(long, visible_alias = "xt", num_args = 1.., help_heading = "フィルタ")]
    pub exclude_type: Vec<String>,

    /// 含めるファイル名（glob 可, 複数指定可）。除外指定とは併用不可
    #[arg(
        long,
        visible_alias = "if",
        num_args = 1..,
        conflicts_with_all = ["exclude_file", "exclude_type"],
        help_heading = "フィルタ"
    )]
    pub include_file: Vec<String>,

    /// 含める拡張子（複数指定可）。除外指定とは併用不可
    #[arg(
        long,
        visible_alias = "it",
        num_args = 1..,
        conflicts_with_all = ["exclude_file", "exclude_type"],
        help_heading = "フィルタ"
    )]
    pub include_type: Vec<String>,

    /// 除外するディレクトリ名（glob 可, 複数指定可）
    #[arg(long, visible_alias = "xd", num_args = 1.., help_heading = "フィルタ")]
    pub exclude_dir: Vec<String>,

    /// 含めるディレクトリ名（glob 可, 複数指定可）。--exclude-dir とは併用不可
    #[arg(
        long,
        visible_alias = "id",
        num_args = 1..,
        conflicts_with = "exclude_dir",
        help_heading = "フィルタ"
    )]
    pub include_dir: Vec<String>,

    /// サブディレクトリも走査
    #[arg(short, long, help_heading = "走査")]
    pub recurse: bool,

    /// 明示的なスタックで走査（深いツリー向け）
    #[arg(long, help_heading = "走査")]
    pub work_list: bool,

    /// 1回にまとめて分類する行数
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        conflicts_with = "sequential",
        help_heading = "走査"
    )]
    pub batch_size: Option<u32>,

    /// 1行ずつ分類
    #[arg(long, help_heading = "走査")]
    pub sequential: bool,

    /// `.` で始まるファイル/ディレクトリを飛ばす
    #[arg(long, help_heading = "走査")]
    pub skip_hidden: bool,

    /// 走査中のディレクトリにある .gitignore に従う
    #[arg(long, help_heading = "走査")]
    pub git_ignore: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査")]
    pub follow: bool,

    /// ファイル毎の内訳も出力
    #[arg(short, long, visible_alias = "vb", help_heading = "出力")]
    pub verbose: bool,

    /// 出力先ファイル（拡張子でフォーマットを判定: json, yaml, csv, db/sql, その他はテキスト）
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 出力フォーマット（拡張子による判定より優先）
    #[arg(long, value_enum, help_heading = "出力")]
    pub format: Option<OutputFormat>,

    /// info レベルのログを表示（RUST_LOG が優先）
    #[arg(short = 'l', long, help_heading = "出力")]
    pub verbose_log: bool,
}

impl Args {
    /// `--format` if given, otherwise guessed from `--output`.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| self.output.as_deref().map(OutputFormat::from_path))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_target_is_required_and_exclusive() {
        assert!(Args::try_parse_from(["cloc"]).is_err());
        assert!(Args::try_parse_from(["cloc", "-d", "src", "-f", "main.rs"]).is_err());
        assert!(Args::try_parse_from(["cloc", "-d", "src"]).is_ok());
    }

    #[test]
    fn test_include_and_exclude_conflict() {
        let err = Args::try_parse_from([
            "cloc",
            "-d",
            ".",
            "--include-type",
            "rs",
            "--exclude-file",
            "main.rs",
        ]);
        assert!(err.is_err());

        let err = Args::try_parse_from(["cloc", "-d", ".", "--include-dir", "a", "--exclude-dir", "b"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_multi_valued_filters() {
        let args =
            Args::try_parse_from(["cloc", "-d", ".", "--exclude-type", "md", "txt", "-r"]).unwrap();
        assert_eq!(args.exclude_type, ["md", "txt"]);
        assert!(args.recurse);
    }

    #[test]
    fn test_output_format_resolution() {
        let args = Args::try_parse_from(["cloc", "-d", ".", "-o", "out.json"]).unwrap();
        assert_eq!(args.output_format(), OutputFormat::Json);

        let args =
            Args::try_parse_from(["cloc", "-d", ".", "-o", "out.json", "--format", "csv"]).unwrap();
        assert_eq!(args.output_format(), OutputFormat::Csv);

        let args = Args::try_parse_from(["cloc", "-d", "."]).unwrap();
        assert_eq!(args.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_batch_size_must_be_positive() {
        assert!(Args::try_parse_from(["cloc", "-d", ".", "--batch-size", "0"]).is_err());
        assert!(Args::try_parse_from(["cloc", "-d", ".", "--batch-size", "8", "--sequential"]).is_err());
    }
}
