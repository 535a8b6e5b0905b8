//! 商品・買い物リスト・購入履歴
//!
//! リストと履歴は呼び出し側（永続化層）の所有物で、コアは読むだけ。

use super::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 名前で照合できるもの（あいまい検索・除外判定に使う）
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// カタログの商品（起動時に与えられ、実行中は変更しない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: Category,
    /// 価格（正の整数、通貨単位）
    pub price: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, category: Category, price: u32) -> Self {
        Self {
            name: name.into(),
            category,
            price,
        }
    }
}

impl Named for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

/// 購入履歴の 1 件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub name: String,
    #[serde(default)]
    pub category: Category,
    /// 購入回数（1 以上）
    pub count: u32,
    pub last_purchased: DateTime<Utc>,
}

impl Named for HistoryEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

fn default_quantity() -> u32 {
    1
}

/// 買い物リストの 1 行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub completed: bool,
}

impl ListItem {
    pub fn new(name: impl Into<String>, quantity: u32, category: Category, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            category,
            price,
            completed: false,
        }
    }
}

impl Named for ListItem {
    fn name(&self) -> &str {
        &self.name
    }
}
