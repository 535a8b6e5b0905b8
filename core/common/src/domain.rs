//! ドメイン型（Newtype）
//!
//! PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use std::path::{Path, PathBuf};

/// ホームディレクトリのパス（設定・ログの置き場所）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// ログファイルのパス（`<home>/logs/shoplist.jsonl`）
    pub fn log_file(&self) -> PathBuf {
        self.0.join("logs").join("shoplist.jsonl")
    }

    /// 商品カタログ上書き用ファイルのパス（`<home>/catalog.json`）
    pub fn catalog_file(&self) -> PathBuf {
        self.0.join("catalog.json")
    }
}
