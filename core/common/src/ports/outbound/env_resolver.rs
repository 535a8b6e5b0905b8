//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ（設定・ログの置き場所）を環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. SHOPLIST_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/shoplist（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/shoplist
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// 構造化ログ（JSONL）の出力先
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.log_file())
    }

    /// 商品カタログ上書きファイルのパス（存在するかどうかは呼び出し側で判定）
    fn resolve_catalog_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.catalog_file())
    }
}
