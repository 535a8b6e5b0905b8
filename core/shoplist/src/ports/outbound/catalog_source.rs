//! 商品カタログの読み込み Outbound ポート

use crate::catalog::Catalog;
use common::error::Error;

/// 起動時に一度だけ呼ばれ、以後カタログは変更しない
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Catalog, Error>;
}
