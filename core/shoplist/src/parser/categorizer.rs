//! 品名からカテゴリを決める

use crate::domain::Category;
use crate::lexicon::Lexicon;

/// 品名を小文字化し、辞書の宣言順でキーワードの部分文字列一致を探す。
/// 最初に当たったカテゴリを返し、無ければ `Other`。
pub fn categorize(lexicon: &Lexicon, item_name: &str) -> Category {
    let lower = item_name.to_lowercase();
    lexicon
        .category_keywords
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw.as_str())))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str) -> Category {
        categorize(&Lexicon::builtin(), name)
    }

    #[test]
    fn test_common_items() {
        assert_eq!(cat("Milk"), Category::Dairy);
        assert_eq!(cat("Bananas"), Category::Produce);
        assert_eq!(cat("Chicken Breast"), Category::Meat);
        assert_eq!(cat("Whole Wheat Bread"), Category::Bakery);
        assert_eq!(cat("Orange Juice"), Category::Produce);
        assert_eq!(cat("Green Tea"), Category::Beverages);
        assert_eq!(cat("Potato Chips"), Category::Produce);
        assert_eq!(cat("Toothpaste"), Category::PersonalCare);
        assert_eq!(cat("Detergent"), Category::Household);
        assert_eq!(cat("Frozen Peas"), Category::Frozen);
        assert_eq!(cat("Basmati Rice"), Category::Pantry);
    }

    #[test]
    fn test_first_declared_category_wins() {
        // "cream" は Dairy と Personal Care の両方にあり、先に宣言された Dairy が勝つ
        assert_eq!(cat("Face Cream"), Category::Dairy);
        assert_eq!(cat("Ice Cream"), Category::Dairy);
    }

    #[test]
    fn test_transliterated_keywords() {
        assert_eq!(cat("Aloo"), Category::Produce);
        assert_eq!(cat("Chawal"), Category::Pantry);
        assert_eq!(cat("Machli"), Category::Meat);
    }

    #[test]
    fn test_unknown_and_empty_fall_back_to_other() {
        assert_eq!(cat("Batteries"), Category::Other);
        assert_eq!(cat(""), Category::Other);
    }

    #[test]
    fn test_deterministic_and_total() {
        for name in ["Milk", "???", "ICE CREAM", "paper towels", "x"] {
            let first = cat(name);
            assert_eq!(first, cat(name));
            assert!(Category::ALL.contains(&first));
        }
    }
}
