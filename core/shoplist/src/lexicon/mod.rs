//! 辞書（キーワード・カテゴリ・数詞・季節・組み合わせの表）
//!
//! 実行中は変更しない。グローバルに持たず、`Arc<Lexicon>` として解析器・推薦器に渡す。

pub mod builtin;

use crate::domain::{Category, CommandKind, Season};

/// コマンド種別ごとのキーワード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandKeywords {
    pub add: Vec<String>,
    pub remove: Vec<String>,
    pub clear: Vec<String>,
    pub show: Vec<String>,
    pub search: Vec<String>,
}

impl CommandKeywords {
    /// 分類の優先順（REMOVE > CLEAR > SEARCH > SHOW）。どれにも当たらなければ ADD。
    pub fn classification_order(&self) -> [(CommandKind, &[String]); 4] {
        [
            (CommandKind::Remove, self.remove.as_slice()),
            (CommandKind::Clear, self.clear.as_slice()),
            (CommandKind::Search, self.search.as_slice()),
            (CommandKind::Show, self.show.as_slice()),
        ]
    }

    /// 品名抽出時に取り除く順（ADD, REMOVE, SEARCH, SHOW, CLEAR）
    pub fn removal_order(&self) -> impl Iterator<Item = &str> {
        self.add
            .iter()
            .chain(&self.remove)
            .chain(&self.search)
            .chain(&self.show)
            .chain(&self.clear)
            .map(String::as_str)
    }
}

/// 規則ベース解析と推薦を動かす表の一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub commands: CommandKeywords,
    pub filler_words: Vec<String>,
    /// 数量の後ろに付く単位（正規表現の断片）
    pub quantity_units: Vec<String>,
    /// 数詞 → 数。表の順に照合し、後で当たったものが勝つ。
    pub word_numbers: Vec<(String, u32)>,
    /// カテゴリ → キーワード。宣言順で最初に当たったカテゴリを採る。
    pub category_keywords: Vec<(Category, Vec<String>)>,
    pub seasonal_items: Vec<(Season, Vec<String>)>,
    pub substitutes: Vec<(String, Vec<String>)>,
    pub complements: Vec<(String, Vec<String>)>,
    pub essentials: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn owned_table<K: Clone>(table: &[(K, &[&str])]) -> Vec<(K, Vec<String>)> {
    table
        .iter()
        .map(|(k, words)| (k.clone(), owned(words)))
        .collect()
}

fn owned_keyed_table(table: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    table
        .iter()
        .map(|(k, words)| (k.to_string(), owned(words)))
        .collect()
}

impl Lexicon {
    /// 組み込みの表（英語＋ヒンディー語ローマ字表記）
    pub fn builtin() -> Self {
        Self {
            commands: CommandKeywords {
                add: owned(builtin::ADD_KEYWORDS),
                remove: owned(builtin::REMOVE_KEYWORDS),
                clear: owned(builtin::CLEAR_KEYWORDS),
                show: owned(builtin::SHOW_KEYWORDS),
                search: owned(builtin::SEARCH_KEYWORDS),
            },
            filler_words: owned(builtin::FILLER_WORDS),
            quantity_units: owned(builtin::QUANTITY_UNITS),
            word_numbers: builtin::WORD_NUMBERS
                .iter()
                .map(|(w, n)| (w.to_string(), *n))
                .collect(),
            category_keywords: owned_table(builtin::CATEGORY_KEYWORDS),
            seasonal_items: owned_table(builtin::SEASONAL_ITEMS),
            substitutes: owned_keyed_table(builtin::SUBSTITUTES),
            complements: owned_keyed_table(builtin::COMPLEMENTS),
            essentials: owned(builtin::ESSENTIALS),
        }
    }

    /// 季節の候補（表に無い季節は空）
    pub fn seasonal_for(&self, season: Season) -> &[String] {
        self.seasonal_items
            .iter()
            .find(|(s, _)| *s == season)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
