//! Outbound ポート

pub mod catalog_source;
pub mod price_source;

pub use catalog_source::CatalogSource;
pub use price_source::PriceSource;
