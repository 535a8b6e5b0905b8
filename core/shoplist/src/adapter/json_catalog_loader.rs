//! JSON ファイルから商品カタログを読む CatalogSource 実装

use crate::catalog::Catalog;
use crate::domain::Product;
use crate::ports::outbound::CatalogSource;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::PathBuf;
use std::sync::Arc;

/// `<home>/catalog.json`（商品の配列）があればそれを、無ければ組み込みカタログを返す
pub struct JsonCatalogLoader {
    fs: Arc<dyn FileSystem>,
    path: Option<PathBuf>,
}

impl JsonCatalogLoader {
    /// path が None（ホームが解決できない等）なら常に組み込みカタログ
    pub fn new(fs: Arc<dyn FileSystem>, path: Option<PathBuf>) -> Self {
        Self { fs, path }
    }
}

impl CatalogSource for JsonCatalogLoader {
    fn load(&self) -> Result<Catalog, Error> {
        let path = match &self.path {
            Some(p) if self.fs.exists(p) => p,
            _ => return Ok(Catalog::builtin()),
        };
        let content = self.fs.read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&content)
            .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))?;
        Ok(Catalog::new(products))
    }
}
