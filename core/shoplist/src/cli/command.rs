//! shoplist コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の Runner が match でディスパッチする。

use shoplist::domain::PriceRange;

/// shoplist のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    /// ヘルプ表示（コマンド未指定時も）
    Help,
    /// 発話を解析して ParsedCommand を出力
    Parse { transcript: String },
    Categorize { name: String },
    /// カタログ検索（--min / --max で価格帯）
    Search {
        query: String,
        price_range: Option<PriceRange>,
    },
    /// --list の中から似た名前の行
    Similar { name: String },
    /// --list / --history から 3 枠の推薦
    Recommend,
    Substitutes { name: String },
    Complements { name: String },
    /// --list からのおすすめ
    Suggest,
    /// --history から必需品の買い忘れ
    Alerts,
    /// 商品の価格（カタログに無ければ既定範囲から）
    Price { name: String },
    /// 発話を --list に適用して新しいリストを出力
    Apply { transcript: String },
    /// 未知のコマンド（エラー用）
    Unknown(String),
}

impl ShopCommand {
    /// コマンド名と引数（語の列）から解析する
    pub fn parse_with_args(name: &str, args: &[String], price_range: Option<PriceRange>) -> Self {
        let text = args.join(" ");
        match name {
            "parse" => ShopCommand::Parse { transcript: text },
            "categorize" => ShopCommand::Categorize { name: text },
            "search" => ShopCommand::Search {
                query: text,
                price_range,
            },
            "similar" => ShopCommand::Similar { name: text },
            "recommend" => ShopCommand::Recommend,
            "substitutes" => ShopCommand::Substitutes { name: text },
            "complements" => ShopCommand::Complements { name: text },
            "suggest" => ShopCommand::Suggest,
            "alerts" => ShopCommand::Alerts,
            "price" => ShopCommand::Price { name: text },
            "apply" => ShopCommand::Apply { transcript: text },
            other => ShopCommand::Unknown(other.to_string()),
        }
    }

    /// ログ用のコマンド名
    pub fn as_str(&self) -> &str {
        match self {
            ShopCommand::Help => "help",
            ShopCommand::Parse { .. } => "parse",
            ShopCommand::Categorize { .. } => "categorize",
            ShopCommand::Search { .. } => "search",
            ShopCommand::Similar { .. } => "similar",
            ShopCommand::Recommend => "recommend",
            ShopCommand::Substitutes { .. } => "substitutes",
            ShopCommand::Complements { .. } => "complements",
            ShopCommand::Suggest => "suggest",
            ShopCommand::Alerts => "alerts",
            ShopCommand::Price { .. } => "price",
            ShopCommand::Apply { .. } => "apply",
            ShopCommand::Unknown(name) => name,
        }
    }
}
