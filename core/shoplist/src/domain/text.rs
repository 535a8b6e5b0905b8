//! 品名の整形ヘルパー

/// 先頭 1 文字だけ大文字にする（残りはそのまま）
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 空白区切りの各語の先頭を大文字にする。語の内部の大文字小文字は直さない。
pub fn title_case_words(s: &str) -> String {
    s.split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 連続する空白を 1 つにまとめ、前後を削る
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("hot chocolate"), "Hot chocolate");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ß"), "SS");
    }

    #[test]
    fn test_title_case_keeps_inner_case() {
        assert_eq!(title_case_words("orange juice"), "Orange Juice");
        assert_eq!(title_case_words("iPhone charger"), "IPhone Charger");
        assert_eq!(title_case_words(""), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  of   water \t"), "of water");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
