//! 推薦エンジン
//!
//! 購入履歴と現在のリストから「よく買う」「そろそろ」「季節」の 3 枠を作る。
//! 入力は読むだけで変更しない。現在時刻は引数で受け取る。

pub mod alerts;
pub mod pairing;

use crate::domain::text::capitalize_first;
use crate::domain::{HistoryEntry, ListItem, Named, Recommendations, Season, Suggestion};
use crate::lexicon::Lexicon;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use std::sync::Arc;

/// 「よく買う」とみなす最小購入回数
pub const FREQUENT_MIN_COUNT: u32 = 2;
pub const FREQUENT_LIMIT: usize = 5;
/// 最終購入からこの日数を超えたら「そろそろ」
pub const DUE_AFTER_DAYS: i64 = 7;
pub const DUE_LIMIT: usize = 3;
pub const SEASONAL_LIMIT: usize = 3;

/// リスト上の品名（小文字）の集合
pub(crate) fn names_on_list(list: &[ListItem]) -> HashSet<String> {
    list.iter().map(|i| i.name().to_lowercase()).collect()
}

#[derive(Debug, Clone)]
pub struct Recommender {
    lexicon: Arc<Lexicon>,
}

impl Recommender {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn builtin() -> Self {
        Self::new(Arc::new(Lexicon::builtin()))
    }

    /// 3 枠を独立に計算する（同じ品目が複数枠に入ってよい）
    pub fn recommend(
        &self,
        list: &[ListItem],
        history: &[HistoryEntry],
        now: DateTime<Utc>,
    ) -> Recommendations {
        let on_list = names_on_list(list);
        Recommendations {
            frequent: frequent(history, &on_list),
            due: due(history, &on_list, now),
            seasonal: self.seasonal(&on_list, now),
        }
    }

    /// 季節の候補のうちリストに無いもの（上位 `SEASONAL_LIMIT` 件）
    pub(crate) fn seasonal(&self, on_list: &HashSet<String>, now: DateTime<Utc>) -> Vec<Suggestion> {
        let season = Season::at(now);
        self.lexicon
            .seasonal_for(season)
            .iter()
            .filter(|item| !on_list.contains(&item.to_lowercase()))
            .take(SEASONAL_LIMIT)
            .map(|item| Suggestion {
                name: capitalize_first(item),
                reason: format!("{} seasonal item", season.label()),
            })
            .collect()
    }
}

fn frequent(history: &[HistoryEntry], on_list: &HashSet<String>) -> Vec<HistoryEntry> {
    let mut hits: Vec<&HistoryEntry> = history
        .iter()
        .filter(|h| h.count >= FREQUENT_MIN_COUNT && !on_list.contains(&h.name.to_lowercase()))
        .collect();
    // 安定ソートなので同数は履歴順のまま
    hits.sort_by(|a, b| b.count.cmp(&a.count));
    hits.into_iter().take(FREQUENT_LIMIT).cloned().collect()
}

fn due(history: &[HistoryEntry], on_list: &HashSet<String>, now: DateTime<Utc>) -> Vec<HistoryEntry> {
    let threshold = now - Duration::days(DUE_AFTER_DAYS);
    history
        .iter()
        .filter(|h| h.last_purchased < threshold && !on_list.contains(&h.name.to_lowercase()))
        .take(DUE_LIMIT)
        .cloned()
        .collect()
}
