//! ユースケース
//!
//! ポート（時刻・価格・ログ）を注入してコアの解析・推薦を呼び出す。

pub mod app;
pub mod apply;

pub use app::ShopUseCase;
pub use apply::{apply_command, Outcome};
