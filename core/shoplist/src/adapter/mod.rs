//! アダプター（shoplist 固有の Outbound ポート実装）
//!
//! ファイルは common の `FileSystem` ポート経由でのみ読む。

pub mod clock_price_source;
pub mod json_catalog_loader;
pub mod json_input;

pub use clock_price_source::ClockPriceSource;
pub use json_catalog_loader::JsonCatalogLoader;
pub use json_input::JsonInputLoader;
