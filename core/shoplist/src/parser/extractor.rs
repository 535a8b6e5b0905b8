//! 品名と数量の抽出
//!
//! 手順（作業用コピーに対して順に適用）:
//! 1. 全コマンド種別のキーワードを語境界で除去
//! 2. つなぎ語を語境界で除去
//! 3. 数字の数量（単位付き可）を最初の 1 件だけ取り出して除去
//! 4. 数詞を表の順に調べる（部分文字列で当たれば数量を上書きし、語全体の一致だけを除去）
//! 5. 空白を詰めて前後を削る
//! 6. 各語の先頭を大文字化

use crate::domain::text::{collapse_whitespace, title_case_words};
use crate::domain::CommandKind;
use crate::lexicon::Lexicon;
use common::error::Error;
use regex::Regex;

/// 抽出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// 整形済みの品名（何も残らなければ空）
    pub item_name: String,
    /// 1 以上
    pub quantity: u32,
}

/// 語境界・大文字小文字無視で語全体に一致する正規表現
pub(crate) fn whole_word(word: &str) -> Result<Regex, Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
        .map_err(|e| Error::system(format!("Invalid keyword pattern '{}': {}", word, e)))
}

/// 辞書から正規表現を組み立てておく抽出器
#[derive(Debug, Clone)]
pub struct Extractor {
    keyword_patterns: Vec<Regex>,
    filler_patterns: Vec<Regex>,
    quantity_pattern: Regex,
    word_number_patterns: Vec<(String, Regex, u32)>,
}

impl Extractor {
    pub fn new(lexicon: &Lexicon) -> Result<Self, Error> {
        let keyword_patterns = lexicon
            .commands
            .removal_order()
            .map(whole_word)
            .collect::<Result<Vec<_>, _>>()?;
        let filler_patterns = lexicon
            .filler_words
            .iter()
            .map(|w| whole_word(w))
            .collect::<Result<Vec<_>, _>>()?;
        let units = lexicon.quantity_units.join("|");
        let quantity_pattern = Regex::new(&format!(r"(?i)([0-9]+)\s*(?:{})?", units))
            .map_err(|e| Error::system(format!("Invalid quantity pattern: {}", e)))?;
        let word_number_patterns = lexicon
            .word_numbers
            .iter()
            .map(|(w, n)| whole_word(w).map(|re| (w.to_lowercase(), re, *n)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            keyword_patterns,
            filler_patterns,
            quantity_pattern,
            word_number_patterns,
        })
    }

    /// 小文字化済みの発話から品名と数量を取り出す
    ///
    /// 除去規則はコマンド種別に依らず同じ（全種別のキーワードを除く）。
    pub fn extract(&self, lower: &str, _kind: CommandKind) -> Extraction {
        let mut text = lower.to_string();

        for re in self.keyword_patterns.iter().chain(&self.filler_patterns) {
            text = re.replace_all(&text, "").into_owned();
        }

        let mut quantity = 1;

        if let Some(caps) = self.quantity_pattern.captures(&text) {
            // 桁あふれは上限に丸める。0 は既定の 1 に寄せる。
            quantity = caps[1].parse::<u32>().unwrap_or(u32::MAX).max(1);
            if let Some(m) = caps.get(0) {
                text.replace_range(m.range(), "");
            }
        }

        // 複数の数詞があると表の後ろのものが勝つ（発話順ではない）。
        // 当たり判定は部分文字列なので "avocado" も "do" に当たるが、品名からは消えない。
        for (word, re, n) in &self.word_number_patterns {
            if text.contains(word.as_str()) {
                quantity = *n;
                text = re.replace_all(&text, "").into_owned();
            }
        }

        let item_name = title_case_words(&collapse_whitespace(&text));
        Extraction {
            item_name,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(s: &str) -> Extraction {
        Extractor::new(&Lexicon::builtin())
            .unwrap()
            .extract(s, CommandKind::Add)
    }

    #[test]
    fn test_bottles_of_water() {
        let e = extract("add 2 bottles of water");
        assert_eq!(e.item_name, "Water");
        assert_eq!(e.quantity, 2);
    }

    #[test]
    fn test_remove_bread_defaults_quantity() {
        let e = extract("remove bread");
        assert_eq!(e.item_name, "Bread");
        assert_eq!(e.quantity, 1);
    }

    #[test]
    fn test_fillers_and_keywords_removed_on_word_boundaries() {
        let e = extract("please add some orange juice to my list");
        assert_eq!(e.item_name, "Orange Juice");
        // "add" の語境界のみ除去されるので "address" は残る
        let e = extract("add address book");
        assert_eq!(e.item_name, "Address Book");
    }

    #[test]
    fn test_numeric_with_units() {
        assert_eq!(extract("buy 3 kg rice").quantity, 3);
        assert_eq!(extract("buy 3 kg rice").item_name, "Rice");
        assert_eq!(extract("get 12 packs chips").item_name, "Chips");
        assert_eq!(extract("add 5 apples").item_name, "Apples");
    }

    #[test]
    fn test_word_numbers() {
        let e = extract("add three apples");
        assert_eq!(e.quantity, 3);
        assert_eq!(e.item_name, "Apples");
        let e = extract("do kela lena");
        assert_eq!(e.quantity, 2);
        assert_eq!(e.item_name, "Kela");
    }

    #[test]
    fn test_word_number_inside_word_sets_quantity_but_stays_in_name() {
        let e = extract("add avocado");
        assert_eq!(e.quantity, 2);
        assert_eq!(e.item_name, "Avocado");
        let e = extract("add doodh");
        assert_eq!(e.quantity, 2);
        assert_eq!(e.item_name, "Doodh");
        let e = extract("add gluten free bread");
        assert_eq!(e.quantity, 10);
        assert_eq!(e.item_name, "Gluten Free Bread");
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_quantity() {
        let e = extract("२ kela chahiye");
        assert_eq!(e.quantity, 1);
        assert_eq!(e.item_name, "२ Kela");
        assert_eq!(extract("add ٣ apples").quantity, 1);
    }

    #[test]
    fn test_digit_overflow_saturates() {
        assert_eq!(extract("add 99999999999 eggs").quantity, u32::MAX);
    }

    #[test]
    fn test_multiple_word_numbers_last_in_table_order_wins() {
        // 発話では "three" が後だが、表では "two" より "three" が後なので 3
        assert_eq!(extract("two three apples").quantity, 3);
        // 表では "ten" より "ek" が後なので 1
        assert_eq!(extract("ek ten apples").quantity, 1);
        assert_eq!(extract("ek ten apples").item_name, "Apples");
    }

    #[test]
    fn test_word_number_overrides_digits() {
        let e = extract("add 4 five mangoes");
        assert_eq!(e.quantity, 5);
        assert_eq!(e.item_name, "Mangoes");
    }

    #[test]
    fn test_zero_quantity_is_bumped_to_one() {
        assert_eq!(extract("add 0 eggs").quantity, 1);
    }

    #[test]
    fn test_everything_stripped_gives_empty_name() {
        let e = extract("add");
        assert_eq!(e.item_name, "");
        assert_eq!(e.quantity, 1);
        let e = extract("   please get me   ");
        assert_eq!(e.item_name, "Me");
    }
}
