//! 商品カタログ（検索・名前引き・価格の解決）

use crate::domain::{Named, PriceRange, Product};
use crate::lexicon::builtin;
use crate::ports::outbound::PriceSource;

/// カタログに無い商品の価格の下限
pub const DEFAULT_PRICE_MIN: u32 = 30;
/// カタログに無い商品の価格の上限
pub const DEFAULT_PRICE_MAX: u32 = 300;

/// 起動時に与えられる商品一覧。実行中は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 組み込みの商品一覧
    pub fn builtin() -> Self {
        Self::new(
            builtin::PRODUCTS
                .iter()
                .map(|(name, category, price)| Product::new(*name, *category, *price))
                .collect(),
        )
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 品名またはカテゴリ名に query を含む商品（大文字小文字無視）
    ///
    /// 価格帯が与えられれば両端を含めて絞り込む（max ちょうどは含み、max 超は除く）。
    /// 0 の端は絞り込みに使わない。
    pub fn search_products(&self, query: &str, price_range: Option<PriceRange>) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.category.as_str().to_lowercase().contains(&query)
            })
            .filter(|p| price_range.map_or(true, |r| r.contains(p.price)))
            .collect()
    }

    /// 名前で 1 件引く（完全一致か、どちらかがもう一方を含む）。編集距離は使わない。
    pub fn find_product_by_name(&self, name: &str) -> Option<&Product> {
        let n = name.trim().to_lowercase();
        if n.is_empty() {
            return None;
        }
        self.products.iter().find(|p| {
            let pname = p.name().to_lowercase();
            pname == n || pname.contains(&n) || n.contains(&pname)
        })
    }

    /// 商品の価格。カタログにあればその価格、無ければ price_source に既定の範囲で決めさせる。
    pub fn price_for_product(&self, name: &str, price_source: &dyn PriceSource) -> u32 {
        match self.find_product_by_name(name) {
            Some(p) if p.price > 0 => p.price,
            _ => price_source.price_between(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX),
        }
    }
}
