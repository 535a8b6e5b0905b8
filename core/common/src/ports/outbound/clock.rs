//! 時刻取得 Outbound ポート
//!
//! コアの推薦ロジックは「現在時刻」を引数で受け取る。usecase はこの trait から取得して渡す。

use chrono::{DateTime, Utc};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の `FixedClock` など。
pub trait Clock: Send + Sync {
    /// 現在時刻（UTC）
    fn now(&self) -> DateTime<Utc>;

    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64 {
        self.now().timestamp_millis().max(0) as u64
    }
}
