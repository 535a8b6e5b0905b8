use super::apply::{apply_command, Outcome};
use crate::catalog::Catalog;
use crate::domain::{
    Category, HistoryEntry, ListItem, ParsedCommand, PriceRange, Product, Recommendations,
    StockAlert, Substitute, Suggestion,
};
use crate::fuzzy;
use crate::parser::CommandParser;
use crate::ports::outbound::PriceSource;
use crate::recommend::Recommender;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// shoplist のユースケース（時刻・価格・ログはポート経由）
pub struct ShopUseCase {
    parser: CommandParser,
    recommender: Recommender,
    catalog: Catalog,
    clock: Arc<dyn Clock>,
    price_source: Arc<dyn PriceSource>,
    logger: Arc<dyn Log>,
}

impl ShopUseCase {
    pub fn new(
        parser: CommandParser,
        recommender: Recommender,
        catalog: Catalog,
        clock: Arc<dyn Clock>,
        price_source: Arc<dyn PriceSource>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            parser,
            recommender,
            catalog,
            clock,
            price_source,
            logger,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn parse(&self, transcript: &str) -> ParsedCommand {
        let parsed = self.parser.parse_command(transcript);
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Debug, "transcript parsed")
                .layer("usecase")
                .kind("parse")
                .field("command", serde_json::json!(parsed.command.as_str()))
                .field("item", serde_json::json!(parsed.item_name))
                .field("quantity", serde_json::json!(parsed.quantity)),
        );
        parsed
    }

    pub fn categorize(&self, name: &str) -> Category {
        self.parser.categorize(name)
    }

    pub fn search(&self, query: &str, price_range: Option<PriceRange>) -> Vec<Product> {
        self.catalog
            .search_products(query, price_range)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn similar(&self, query: &str, list: &[ListItem]) -> Vec<ListItem> {
        fuzzy::find_similar(query, list).into_iter().cloned().collect()
    }

    pub fn recommend(&self, list: &[ListItem], history: &[HistoryEntry]) -> Recommendations {
        let now = self.clock.now();
        let rec = self.recommender.recommend(list, history, now);
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Debug, "recommendations built")
                .layer("usecase")
                .kind("recommend")
                .field("frequent", serde_json::json!(rec.frequent.len()))
                .field("due", serde_json::json!(rec.due.len()))
                .field("seasonal", serde_json::json!(rec.seasonal.len())),
        );
        rec
    }

    pub fn substitutes(&self, name: &str) -> Vec<Substitute> {
        self.recommender.substitutes(name)
    }

    pub fn complements(&self, name: &str) -> Vec<Suggestion> {
        self.recommender.complements(name)
    }

    pub fn smart_suggestions(&self, list: &[ListItem]) -> Vec<Suggestion> {
        self.recommender.smart_suggestions(list, self.clock.now())
    }

    pub fn low_stock_alerts(&self, history: &[HistoryEntry]) -> Vec<StockAlert> {
        self.recommender.low_stock_alerts(history, self.clock.now())
    }

    pub fn price_for(&self, name: &str) -> u32 {
        self.catalog.price_for_product(name, self.price_source.as_ref())
    }

    /// 発話を解析してリストに適用する
    pub fn apply(&self, list: &[ListItem], transcript: &str) -> (ParsedCommand, Vec<ListItem>, Outcome) {
        let parsed = self.parse(transcript);
        let (next, outcome) =
            apply_command(list, &parsed, &self.catalog, self.price_source.as_ref());
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, outcome.message())
                .layer("usecase")
                .kind("apply")
                .field("items", serde_json::json!(next.len())),
        );
        (parsed, next, outcome)
    }
}
