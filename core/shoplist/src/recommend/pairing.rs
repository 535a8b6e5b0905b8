//! 代替品・組み合わせ・おすすめ

use super::{names_on_list, Recommender};
use crate::domain::text::capitalize_first;
use crate::domain::{ListItem, Substitute, Suggestion};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub const SMART_SUGGESTION_LIMIT: usize = 5;

/// 表のキーのうち、品名（小文字）に含まれる最初のものの値
fn first_entry<'a>(table: &'a [(String, Vec<String>)], name: &str) -> Option<&'a [String]> {
    let lower = name.to_lowercase();
    table
        .iter()
        .find(|(key, _)| lower.contains(key.as_str()))
        .map(|(_, values)| values.as_slice())
}

impl Recommender {
    /// 代替品（表に無ければ空）
    pub fn substitutes(&self, name: &str) -> Vec<Substitute> {
        first_entry(&self.lexicon.substitutes, name)
            .unwrap_or(&[])
            .iter()
            .map(|s| Substitute {
                name: capitalize_first(s),
                original: name.to_string(),
            })
            .collect()
    }

    /// 一緒に買うとよいもの（表に無ければ空）
    pub fn complements(&self, name: &str) -> Vec<Suggestion> {
        first_entry(&self.lexicon.complements, name)
            .unwrap_or(&[])
            .iter()
            .map(|c| Suggestion {
                name: capitalize_first(c),
                reason: format!("Goes well with {}", name),
            })
            .collect()
    }

    /// リスト各行の組み合わせ → 季節の候補、の順に集め、同名を除いて上位 5 件
    pub fn smart_suggestions(&self, list: &[ListItem], now: DateTime<Utc>) -> Vec<Suggestion> {
        let on_list = names_on_list(list);
        let mut seen = HashSet::new();
        list.iter()
            .flat_map(|item| self.complements(&item.name))
            .chain(self.seasonal(&on_list, now))
            .filter(|s| seen.insert(s.name.clone()))
            .take(SMART_SUGGESTION_LIMIT)
            .collect()
    }
}
