use crate::filter::NameFilter;
use crate::options::{ScanMode, Target, Traversal};
use cloc_core::CommentSyntax;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    /// サブディレクトリも走査する
    #[builder(default)]
    pub recurse: bool,
    #[builder(default)]
    pub traversal: Traversal,
    /// `.` で始まるエントリを飛ばす
    #[builder(default)]
    pub skip_hidden: bool,
    /// 走査中のディレクトリにある `.gitignore` に従う
    #[builder(default)]
    pub git_ignore: bool,
    /// シンボリックリンクを辿る
    #[builder(default)]
    pub follow_links: bool,
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub target: Target,
    #[builder(default)]
    pub walk: WalkOptions,

    /// ファイル毎・ディレクトリ毎の内訳を保持する
    #[builder(default)]
    pub verbose: bool,
    #[builder(default)]
    pub scan_mode: ScanMode,

    /// 全ファイルに適用するコメント構文（拡張子による解決を行わない）
    #[builder(default)]
    pub syntax_override: Option<CommentSyntax>,
    /// 拡張子テーブル (JSON)。未指定なら組み込みテーブル
    #[builder(default)]
    pub languages: Option<PathBuf>,

    #[builder(default)]
    pub file_filter: Option<NameFilter>,
    #[builder(default)]
    pub dir_filter: Option<NameFilter>,
}
