//! 推薦結果の型

use super::item::{HistoryEntry, Named};
use serde::{Deserialize, Serialize};

/// 名前と理由だけの提案（季節枠・組み合わせ提案）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub reason: String,
}

impl Named for Suggestion {
    fn name(&self) -> &str {
        &self.name
    }
}

/// 代替品の提案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitute {
    pub name: String,
    /// 代替元として渡された品名（そのまま）
    pub original: String,
}

/// 買い足し時期を過ぎた必需品の通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub name: String,
    pub days_since: i64,
    pub message: String,
}

/// 推薦の 3 枠。各枠は独立に計算され、同じ品目が複数の枠に入り得る。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub frequent: Vec<HistoryEntry>,
    pub due: Vec<HistoryEntry>,
    pub seasonal: Vec<Suggestion>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.frequent.is_empty() && self.due.is_empty() && self.seasonal.is_empty()
    }
}
