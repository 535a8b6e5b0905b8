//! ドメイン型
//!
//! 解析結果・カテゴリ・商品・履歴・推薦結果。I/O を持たない値だけを置く。

pub mod category;
pub mod command;
pub mod item;
pub mod season;
pub mod suggestion;
pub mod text;

pub use category::Category;
pub use command::{CommandKind, ParsedCommand, PriceRange};
pub use item::{HistoryEntry, ListItem, Named, Product};
pub use season::Season;
pub use suggestion::{Recommendations, StockAlert, Substitute, Suggestion};
