use super::command::ShopCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use shoplist::domain::PriceRange;

/// CLI から受け取った生の設定（command は文字列のまま保持）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -d / --home-dir: SHOPLIST_HOME をこのプロセスに設定する
    pub home_dir: Option<String>,
    /// --list: 買い物リスト（JSON 配列）
    pub list_file: Option<String>,
    /// --history: 購入履歴（JSON 配列）
    pub history_file: Option<String>,
    /// --now: 現在時刻の上書き（RFC3339）
    pub now: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    /// コマンド名（None の場合は Help）
    pub command_name: Option<String>,
    pub command_args: Vec<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

const TEXT_COMMANDS: &[(&str, &str, &str)] = &[
    ("parse", "Parse a spoken/typed command into JSON", "transcript"),
    ("categorize", "Show the category for an item name", "name"),
    ("similar", "Find list items similar to a name (uses --list)", "name"),
    ("substitutes", "Suggest substitutes for an item", "name"),
    ("complements", "Suggest items that go well with an item", "name"),
    ("price", "Show the price for an item (catalog or default range)", "name"),
    ("apply", "Apply a command to the list (uses --list) and print the new list", "transcript"),
];

fn words_arg(value_name: &'static str) -> clap::Arg {
    clap::Arg::new("words")
        .value_name(value_name)
        .help("Words (joined with spaces)")
        .num_args(0..)
        .trailing_var_arg(true)
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .value_name("directory")
                .help("Specify a home directory (sets SHOPLIST_HOME for this process)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("list")
                .long("list")
                .value_name("file")
                .help("Current shopping list (JSON array of items)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("history")
                .long("history")
                .value_name("file")
                .help("Purchase history (JSON array of entries)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("now")
                .long("now")
                .value_name("timestamp")
                .help("Use this time instead of the system clock (RFC3339)")
                .global(true)
                .num_args(1),
        )
}

fn build_clap_command() -> clap::Command {
    let mut cmd = global_args(clap::Command::new("shoplist"))
        .about("Voice shopping-list command interpreter and recommender")
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        );

    for (name, about, value_name) in TEXT_COMMANDS {
        cmd = cmd.subcommand(
            clap::Command::new(*name)
                .about(*about)
                .disable_help_flag(true)
                .arg(words_arg(*value_name)),
        );
    }

    cmd.subcommand(
        clap::Command::new("search")
            .about("Search the product catalog by name or category")
            .disable_help_flag(true)
            .arg(
                clap::Arg::new("min")
                    .long("min")
                    .value_name("price")
                    .help("Minimum price (inclusive)")
                    .value_parser(value_parser!(u32))
                    .num_args(1),
            )
            .arg(
                clap::Arg::new("max")
                    .long("max")
                    .value_name("price")
                    .help("Maximum price (inclusive)")
                    .value_parser(value_parser!(u32))
                    .num_args(1),
            )
            .arg(words_arg("query")),
    )
    .subcommand(
        clap::Command::new("recommend")
            .about("Frequent, due and seasonal recommendations (uses --list and --history)")
            .disable_help_flag(true),
    )
    .subcommand(
        clap::Command::new("suggest")
            .about("Smart suggestions for the current list (uses --list)")
            .disable_help_flag(true),
    )
    .subcommand(
        clap::Command::new("alerts")
            .about("Essentials not bought recently (uses --history)")
            .disable_help_flag(true),
    )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    let home_dir = matches.get_one::<String>("home-dir").cloned();
    let list_file = matches.get_one::<String>("list").cloned();
    let history_file = matches.get_one::<String>("history").cloned();
    let now = matches.get_one::<String>("now").cloned();

    let (command_name, command_args, min_price, max_price) = match matches.subcommand() {
        None => (None, Vec::new(), None, None),
        Some((name, sub)) => {
            let words: Vec<String> = sub
                .try_get_many::<String>("words")
                .ok()
                .flatten()
                .map(|i| i.cloned().collect())
                .unwrap_or_default();
            let min = sub.try_get_one::<u32>("min").ok().flatten().copied();
            let max = sub.try_get_one::<u32>("max").ok().flatten().copied();
            (Some(name.to_string()), words, min, max)
        }
    };

    Config {
        help,
        home_dir,
        list_file,
        history_file,
        now,
        min_price,
        max_price,
        command_name,
        command_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "shoplist", &mut std::io::stdout());
}

/// Config を ShopCommand に変換する
pub fn config_to_command(config: &Config) -> ShopCommand {
    if config.help {
        return ShopCommand::Help;
    }
    let price_range = match (config.min_price, config.max_price) {
        (None, None) => None,
        (min, max) => Some(PriceRange::new(min.unwrap_or(0), max.unwrap_or(u32::MAX))),
    };
    match &config.command_name {
        None => ShopCommand::Help,
        Some(name) => ShopCommand::parse_with_args(name, &config.command_args, price_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_no_args_is_help() {
        let config = parse_args_from(&["shoplist"]).unwrap();
        assert!(config.command_name.is_none());
        assert_eq!(config_to_command(&config), ShopCommand::Help);
    }

    #[test]
    fn test_parse_args_help_flag_anywhere() {
        assert!(parse_args_from(&["shoplist", "-h"]).unwrap().help);
        let config = parse_args_from(&["shoplist", "recommend", "--help"]).unwrap();
        assert_eq!(config_to_command(&config), ShopCommand::Help);
    }

    #[test]
    fn test_parse_args_transcript_words() {
        let config = parse_args_from(&["shoplist", "parse", "add", "2", "bottles", "of", "water"]).unwrap();
        assert_eq!(config.command_name.as_deref(), Some("parse"));
        assert_eq!(
            config_to_command(&config),
            ShopCommand::Parse {
                transcript: "add 2 bottles of water".to_string()
            }
        );
    }

    #[test]
    fn test_parse_args_search_price_range() {
        let config = parse_args_from(&["shoplist", "search", "--max", "50", "milk"]).unwrap();
        assert_eq!(
            config_to_command(&config),
            ShopCommand::Search {
                query: "milk".to_string(),
                price_range: Some(PriceRange::up_to(50)),
            }
        );

        let config = parse_args_from(&["shoplist", "search", "--min", "100", "tea"]).unwrap();
        assert_eq!(
            config_to_command(&config),
            ShopCommand::Search {
                query: "tea".to_string(),
                price_range: Some(PriceRange::new(100, u32::MAX)),
            }
        );
    }

    #[test]
    fn test_parse_args_global_options_after_subcommand() {
        let config = parse_args_from(&[
            "shoplist",
            "recommend",
            "--list",
            "list.json",
            "--history",
            "history.json",
            "--now",
            "2026-06-01T00:00:00Z",
        ])
        .unwrap();
        assert_eq!(config.list_file.as_deref(), Some("list.json"));
        assert_eq!(config.history_file.as_deref(), Some("history.json"));
        assert_eq!(config.now.as_deref(), Some("2026-06-01T00:00:00Z"));
        assert_eq!(config_to_command(&config), ShopCommand::Recommend);
    }

    #[test]
    fn test_parse_args_home_dir_short() {
        let config = parse_args_from(&["shoplist", "-d", "/tmp/shop", "alerts"]).unwrap();
        assert_eq!(config.home_dir.as_deref(), Some("/tmp/shop"));
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        let err = parse_args_from(&["shoplist", "--unknown"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        let err = parse_args_from(&["shoplist", "search", "--max", "cheap", "milk"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        let err = parse_args_from(&["shoplist", "frobnicate"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }
}
