//! 商品カテゴリ（閉じた列挙）

use serde::{Deserialize, Serialize};

/// 売り場カテゴリ
///
/// すべての商品はちょうど 1 つのカテゴリに属する。JSON では表示名（"Meat & Seafood" 等）で表す。
/// 未知の表示名は `Other` として読み込む。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Dairy,
    Produce,
    Meat,
    Bakery,
    Beverages,
    Snacks,
    PersonalCare,
    Household,
    Frozen,
    Pantry,
    #[default]
    Other,
}

impl Category {
    /// 宣言順の全カテゴリ
    pub const ALL: [Category; 11] = [
        Category::Dairy,
        Category::Produce,
        Category::Meat,
        Category::Bakery,
        Category::Beverages,
        Category::Snacks,
        Category::PersonalCare,
        Category::Household,
        Category::Frozen,
        Category::Pantry,
        Category::Other,
    ];

    /// 表示名
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dairy => "Dairy",
            Category::Produce => "Produce",
            Category::Meat => "Meat & Seafood",
            Category::Bakery => "Bakery",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::PersonalCare => "Personal Care",
            Category::Household => "Household",
            Category::Frozen => "Frozen Foods",
            Category::Pantry => "Pantry",
            Category::Other => "Other",
        }
    }

    /// 表示名から解決する（大文字小文字は無視）
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from_label(&s).unwrap_or_default()
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}
