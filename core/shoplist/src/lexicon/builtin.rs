//! 組み込みの辞書データ
//!
//! 照合順に意味がある表（カテゴリ・数詞）は配列で順序を固定する。

use crate::domain::{Category, Season};

pub const ADD_KEYWORDS: &[&str] = &[
    "add", "buy", "need", "want", "get", "purchase", "khareed", "lena", "chahiye",
];
pub const REMOVE_KEYWORDS: &[&str] = &["remove", "delete", "cancel", "hata", "nikaal"];
pub const CLEAR_KEYWORDS: &[&str] = &["clear", "empty", "reset", "sab hata", "khali kar"];
pub const SHOW_KEYWORDS: &[&str] = &["show", "display", "list", "dikha", "batao"];
pub const SEARCH_KEYWORDS: &[&str] = &["search", "find", "look for", "dhundh", "khoj"];

/// 品名から取り除く語。"of" は "2 bottles of water" → "Water" のために加えている。
pub const FILLER_WORDS: &[&str] = &[
    "to", "my", "list", "the", "a", "an", "some", "from", "please", "can", "you", "i", "want",
    "need", "get", "of",
];

/// 数量に付く単位（正規表現の断片）
pub const QUANTITY_UNITS: &[&str] = &[
    "bottles?", "pieces?", "kg", "grams?", "liters?", "packs?", "boxes?",
];

pub const WORD_NUMBERS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("ek", 1),
    ("do", 2),
    ("teen", 3),
    ("char", 4),
    ("paanch", 5),
];

pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Dairy,
        &["milk", "cheese", "butter", "yogurt", "cream", "paneer", "dahi", "ghee"],
    ),
    (
        Category::Produce,
        &[
            "apple", "banana", "orange", "tomato", "potato", "onion", "carrot", "lettuce",
            "spinach", "fruit", "vegetable", "sabzi", "aam", "kela", "tamatar", "pyaz", "aloo",
        ],
    ),
    (
        Category::Meat,
        &["chicken", "beef", "pork", "fish", "salmon", "mutton", "lamb", "murga", "machli"],
    ),
    (
        Category::Bakery,
        &["bread", "bun", "cake", "cookie", "pastry", "roti", "pav", "naan"],
    ),
    (
        Category::Beverages,
        &["water", "juice", "soda", "coffee", "tea", "beer", "wine", "cola", "chai", "pani"],
    ),
    (
        Category::Snacks,
        &["chips", "chocolate", "candy", "nuts", "biscuit", "namkeen", "kurkure"],
    ),
    (
        Category::PersonalCare,
        &["soap", "shampoo", "toothpaste", "deodorant", "lotion", "cream", "powder", "tel"],
    ),
    (
        Category::Household,
        &["detergent", "cleaner", "tissues", "paper", "napkin", "surf", "vim", "lizol"],
    ),
    (Category::Frozen, &["ice cream", "frozen", "peas", "pizza"]),
    (
        Category::Pantry,
        &[
            "rice", "flour", "sugar", "salt", "oil", "spice", "pasta", "chawal", "atta", "masala",
            "namak", "chini",
        ],
    ),
];

pub const SEASONAL_ITEMS: &[(Season, &[&str])] = &[
    (
        Season::Winter,
        &["oranges", "carrots", "cauliflower", "peas", "hot chocolate"],
    ),
    (
        Season::Summer,
        &["mangoes", "watermelon", "cucumber", "ice cream", "cold drinks"],
    ),
    (Season::Monsoon, &["corn", "pakora ingredients", "tea", "ginger"]),
    (Season::Spring, &["strawberries", "asparagus", "lettuce"]),
];

pub const SUBSTITUTES: &[(&str, &[&str])] = &[
    ("milk", &["almond milk", "soy milk", "oat milk", "coconut milk"]),
    ("butter", &["margarine", "ghee", "olive oil"]),
    ("sugar", &["honey", "jaggery", "stevia"]),
    ("bread", &["roti", "tortilla", "pita bread"]),
    ("chicken", &["tofu", "paneer", "mushrooms"]),
];

pub const COMPLEMENTS: &[(&str, &[&str])] = &[
    ("bread", &["butter", "jam", "cheese", "eggs"]),
    ("milk", &["cereal", "cookies", "coffee", "tea"]),
    ("pasta", &["tomato sauce", "cheese", "olive oil"]),
    ("rice", &["dal", "curry", "vegetables"]),
    ("tea", &["sugar", "milk", "biscuits"]),
    ("coffee", &["milk", "sugar", "cream"]),
    ("chips", &["soda", "dip", "salsa"]),
    ("flour", &["sugar", "eggs", "butter", "yeast"]),
];

/// 切らすと困る品目（在庫アラートの対象）
pub const ESSENTIALS: &[&str] = &["milk", "bread", "eggs", "rice", "water"];

pub const PRODUCTS: &[(&str, Category, u32)] = &[
    ("Milk", Category::Dairy, 60),
    ("Cheese", Category::Dairy, 120),
    ("Butter", Category::Dairy, 50),
    ("Yogurt", Category::Dairy, 40),
    ("Paneer", Category::Dairy, 80),
    ("Apples", Category::Produce, 150),
    ("Bananas", Category::Produce, 60),
    ("Tomatoes", Category::Produce, 40),
    ("Onions", Category::Produce, 30),
    ("Potatoes", Category::Produce, 25),
    ("Carrots", Category::Produce, 35),
    ("Bread", Category::Bakery, 35),
    ("Buns", Category::Bakery, 40),
    ("Water Bottle", Category::Beverages, 20),
    ("Orange Juice", Category::Beverages, 80),
    ("Coffee", Category::Beverages, 250),
    ("Tea", Category::Beverages, 150),
    ("Chips", Category::Snacks, 20),
    ("Chocolate", Category::Snacks, 50),
    ("Cookies", Category::Snacks, 30),
    ("Biscuits", Category::Snacks, 25),
    ("Toothpaste", Category::PersonalCare, 80),
    ("Soap", Category::PersonalCare, 40),
    ("Shampoo", Category::PersonalCare, 150),
    ("Detergent", Category::Household, 200),
    ("Tissues", Category::Household, 60),
    ("Rice", Category::Pantry, 50),
    ("Flour", Category::Pantry, 40),
    ("Sugar", Category::Pantry, 45),
    ("Salt", Category::Pantry, 20),
    ("Cooking Oil", Category::Pantry, 180),
];
