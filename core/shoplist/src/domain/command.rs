//! 音声コマンドの解析結果

use super::category::Category;
use serde::{Deserialize, Serialize};

/// コマンド種別
///
/// 分類器は `Unknown` を返さない（何も一致しなければ `Add`）。`Unknown` は呼び出し側の入力用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandKind {
    Add,
    Remove,
    Clear,
    Show,
    Search,
    Unknown,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Add => "ADD",
            CommandKind::Remove => "REMOVE",
            CommandKind::Clear => "CLEAR",
            CommandKind::Show => "SHOW",
            CommandKind::Search => "SEARCH",
            CommandKind::Unknown => "UNKNOWN",
        }
    }

    /// 品名が無いと実行できない種別か
    pub fn requires_item(&self) -> bool {
        matches!(self, CommandKind::Add | CommandKind::Remove | CommandKind::Search)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 価格帯（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// 上限のみ（下限 0）
    pub fn up_to(max: u32) -> Self {
        Self { min: 0, max }
    }

    /// 両端を含む。0 の端は指定なしとみなす（`max == 0` なら上限なし）。
    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && (self.max == 0 || price <= self.max)
    }
}

/// 1 発話分の解析結果
///
/// 発話ごとに作られ、呼び出し側が消費したら捨てる。`item_name` が空なら「聞き取れなかった」扱い。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommand {
    pub command: CommandKind,
    pub item_name: String,
    pub quantity: u32,
    pub category: Category,
    pub price_range: Option<PriceRange>,
    pub original_transcript: String,
}

impl ParsedCommand {
    pub fn has_item(&self) -> bool {
        !self.item_name.is_empty()
    }

    /// 呼び出し側がそのまま実行できるか（品名必須の種別で品名が空なら false）
    pub fn is_actionable(&self) -> bool {
        match self.command {
            CommandKind::Unknown => false,
            kind if kind.requires_item() => self.has_item(),
            _ => true,
        }
    }
}
