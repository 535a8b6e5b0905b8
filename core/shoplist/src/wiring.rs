//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, FixedClock, NoopLog, StdClock, StdEnvResolver, StdFileSystem};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use shoplist::adapter::{ClockPriceSource, JsonCatalogLoader, JsonInputLoader};
use shoplist::ports::outbound::{CatalogSource, PriceSource};
use shoplist::usecase::ShopUseCase;
use shoplist::{CommandParser, Lexicon, Recommender};

/// 配線で組み立てたユースケースとポート群（main の Command ディスパッチで利用）
pub struct App {
    pub use_case: ShopUseCase,
    pub input: JsonInputLoader,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
///
/// `now` が与えられればシステム時計の代わりに固定時刻を使う。
pub fn wire_shoplist(now: Option<&str>) -> Result<App, Error> {
    wire_shoplist_with(Arc::new(StdEnvResolver), now)
}

/// ホームディレクトリの解決方法を差し替えて組み立てる（テストでは一時ディレクトリを渡す）
pub fn wire_shoplist_with(
    env_resolver: Arc<dyn EnvResolver>,
    now: Option<&str>,
) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger: Arc<dyn Log> = env_resolver
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(&fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));

    let clock: Arc<dyn Clock> = match now {
        Some(s) => Arc::new(FixedClock::parse(s)?),
        None => Arc::new(StdClock),
    };

    let catalog_path = env_resolver.resolve_catalog_path().ok();
    let catalog = JsonCatalogLoader::new(Arc::clone(&fs), catalog_path.clone()).load()?;
    let _ = logger.log(
        &LogRecord::new(LogLevel::Debug, "catalog loaded")
            .layer("wiring")
            .kind("config")
            .field("products", serde_json::json!(catalog.len()))
            .field(
                "path",
                serde_json::json!(catalog_path.map(|p| p.display().to_string())),
            ),
    );

    let lexicon = Arc::new(Lexicon::builtin());
    let parser = CommandParser::new(Arc::clone(&lexicon))?;
    let recommender = Recommender::new(lexicon);
    let price_source: Arc<dyn PriceSource> = Arc::new(ClockPriceSource::new(Arc::clone(&clock)));

    let use_case = ShopUseCase::new(
        parser,
        recommender,
        catalog,
        clock,
        price_source,
        Arc::clone(&logger),
    );
    Ok(App {
        use_case,
        input: JsonInputLoader::new(fs),
        logger,
    })
}
