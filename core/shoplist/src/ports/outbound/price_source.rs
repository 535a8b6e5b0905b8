//! カタログに無い商品の価格を決める Outbound ポート

/// 価格の決め方（実装は `adapter::ClockPriceSource` やテスト用の固定値など）
pub trait PriceSource: Send + Sync {
    /// min 以上 max 以下の価格を 1 つ返す
    fn price_between(&self, min: u32, max: u32) -> u32;
}
