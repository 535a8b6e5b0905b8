//! 必需品の買い忘れ通知

use super::Recommender;
use crate::domain::{HistoryEntry, StockAlert};
use chrono::{DateTime, Utc};

/// 最終購入からこの日数を超えたら通知する
pub const LOW_STOCK_AFTER_DAYS: i64 = 5;

impl Recommender {
    /// 必需品ごとに、品名にそれを含む最初の履歴を見て経過日数（切り捨て）で判定する
    pub fn low_stock_alerts(&self, history: &[HistoryEntry], now: DateTime<Utc>) -> Vec<StockAlert> {
        self.lexicon
            .essentials
            .iter()
            .filter_map(|essential| {
                history
                    .iter()
                    .find(|h| h.name.to_lowercase().contains(essential.as_str()))
            })
            .filter_map(|h| {
                let days = (now - h.last_purchased).num_days();
                (days > LOW_STOCK_AFTER_DAYS).then(|| StockAlert {
                    name: h.name.clone(),
                    days_since: days,
                    message: format!("You haven't bought {} in {} days", h.name, days),
                })
            })
            .collect()
    }
}
