//! 音声コマンド解析器
//!
//! 発話 → 種別判定 → 品名・数量抽出 → カテゴリ判定 → 価格条件 → `ParsedCommand`。
//! 正規表現は生成時に一度だけ組み立てる。状態は持たないので使い回してよい。

pub mod categorizer;
pub mod classifier;
pub mod extractor;
pub mod price;

pub use categorizer::categorize;
pub use classifier::classify;
pub use extractor::{Extraction, Extractor};
pub use price::PriceRangeParser;

use crate::domain::{Category, CommandKind, ParsedCommand, PriceRange};
use crate::lexicon::Lexicon;
use common::error::Error;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CommandParser {
    lexicon: Arc<Lexicon>,
    extractor: Extractor,
    price: PriceRangeParser,
}

impl CommandParser {
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self, Error> {
        let extractor = Extractor::new(&lexicon)?;
        let price = PriceRangeParser::new()?;
        Ok(Self {
            lexicon,
            extractor,
            price,
        })
    }

    /// 組み込み辞書で作る
    pub fn builtin() -> Result<Self, Error> {
        Self::new(Arc::new(Lexicon::builtin()))
    }

    /// 発話 1 件を解析する。失敗はせず、品名が取れなければ `item_name` が空になる。
    pub fn parse_command(&self, transcript: &str) -> ParsedCommand {
        let lower = transcript.to_lowercase();
        let lower = lower.trim();

        let command = self.classify(lower);
        let Extraction {
            item_name,
            quantity,
        } = self.extract(lower, command);
        let category = self.categorize(&item_name);
        let price_range = self.extract_price_range(lower);

        ParsedCommand {
            command,
            item_name,
            quantity,
            category,
            price_range,
            original_transcript: transcript.to_string(),
        }
    }

    pub fn classify(&self, lower: &str) -> CommandKind {
        classify(&self.lexicon, lower)
    }

    pub fn extract(&self, lower: &str, kind: CommandKind) -> Extraction {
        self.extractor.extract(lower, kind)
    }

    pub fn categorize(&self, item_name: &str) -> Category {
        categorize(&self.lexicon, item_name)
    }

    pub fn extract_price_range(&self, lower: &str) -> Option<PriceRange> {
        self.price.parse(lower)
    }
}
