//! 解析結果を買い物リストに適用する
//!
//! 元のリストは変更せず、新しいリストと結果（通知文言の元）を返す。

use crate::catalog::{Catalog, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
use crate::domain::{CommandKind, ListItem, ParsedCommand, Product};
use crate::ports::outbound::PriceSource;
use serde::Serialize;

/// 適用結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Added { name: String, quantity: u32 },
    /// 既存行の数量を増やした（quantity は増やした後の値）
    Updated { name: String, quantity: u32 },
    /// 品名が取れなかった（what は足りなかったもの）
    NotUnderstood { what: String },
    Removed { name: String },
    NotFound { name: String },
    Cleared,
    Shown { count: usize },
    Searched { query: String, results: Vec<Product> },
    NotRecognized,
}

impl Outcome {
    /// ユーザー向けの通知文言
    pub fn message(&self) -> String {
        match self {
            Outcome::Added { name, quantity } => format!("Added {} {} to your list", quantity, name),
            Outcome::Updated { name, quantity } => {
                format!("Updated {} quantity to {}", name, quantity)
            }
            Outcome::NotUnderstood { what } => format!("Could not understand {}", what),
            Outcome::Removed { name } => format!("Removed {} from your list", name),
            Outcome::NotFound { name } => format!("{} not found in your list", name),
            Outcome::Cleared => "Shopping list cleared".to_string(),
            Outcome::Shown { count } => format!("Your list has {} items", count),
            Outcome::Searched { query, results } => {
                format!("Found {} products for {}", results.len(), query)
            }
            Outcome::NotRecognized => "Command not recognized. Please try again.".to_string(),
        }
    }
}

/// 1 コマンドをリストに適用する
pub fn apply_command(
    list: &[ListItem],
    parsed: &ParsedCommand,
    catalog: &Catalog,
    price_source: &dyn PriceSource,
) -> (Vec<ListItem>, Outcome) {
    let mut next = list.to_vec();
    let outcome = match parsed.command {
        CommandKind::Add if parsed.has_item() => add(&mut next, parsed, catalog, price_source),
        CommandKind::Add => Outcome::NotUnderstood {
            what: "item name".to_string(),
        },
        CommandKind::Remove if parsed.has_item() => remove(&mut next, &parsed.item_name),
        CommandKind::Remove => Outcome::NotUnderstood {
            what: "which item to remove".to_string(),
        },
        CommandKind::Clear => {
            next.clear();
            Outcome::Cleared
        }
        CommandKind::Show => Outcome::Shown { count: next.len() },
        CommandKind::Search if parsed.has_item() => Outcome::Searched {
            query: parsed.item_name.clone(),
            results: catalog
                .search_products(&parsed.item_name, parsed.price_range)
                .into_iter()
                .cloned()
                .collect(),
        },
        CommandKind::Search | CommandKind::Unknown => Outcome::NotRecognized,
    };
    (next, outcome)
}

fn add(
    list: &mut Vec<ListItem>,
    parsed: &ParsedCommand,
    catalog: &Catalog,
    price_source: &dyn PriceSource,
) -> Outcome {
    let name = &parsed.item_name;
    let lower = name.to_lowercase();
    if let Some(existing) = list.iter_mut().find(|i| i.name.to_lowercase() == lower) {
        existing.quantity = existing.quantity.saturating_add(parsed.quantity);
        return Outcome::Updated {
            name: existing.name.clone(),
            quantity: existing.quantity,
        };
    }

    let price = catalog
        .search_products(name, None)
        .first()
        .map(|p| p.price)
        .unwrap_or_else(|| price_source.price_between(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX));
    list.push(ListItem::new(
        name.clone(),
        parsed.quantity,
        parsed.category,
        f64::from(price),
    ));
    Outcome::Added {
        name: name.clone(),
        quantity: parsed.quantity,
    }
}

fn remove(list: &mut Vec<ListItem>, name: &str) -> Outcome {
    let lower = name.to_lowercase();
    match list.iter().position(|i| i.name.to_lowercase().contains(&lower)) {
        Some(idx) => {
            let removed = list.remove(idx);
            Outcome::Removed { name: removed.name }
        }
        None => Outcome::NotFound {
            name: name.to_string(),
        },
    }
}
