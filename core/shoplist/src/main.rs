mod cli;
mod inbound;
mod wiring;

use std::path::Path;
use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome, ShopCommand};
use common::adapter::std_env_resolver::HOME_ENV;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use inbound::UseCaseRunner;
use serde::Serialize;
use wiring::{wire_shoplist, App};

/// ShopCommand をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config);
        let command_name = cmd.as_str().to_string();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", serde_json::json!(command_name)),
        );

        let result = self.dispatch(cmd, &config);

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", serde_json::json!(command_name))
                .field("exit_code", serde_json::json!(code)),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: ShopCommand, config: &Config) -> Result<i32, Error> {
        let uc = &self.app.use_case;
        let list_path = config.list_file.as_deref().map(Path::new);
        let history_path = config.history_file.as_deref().map(Path::new);

        match cmd {
            ShopCommand::Help => {
                print_help();
                Ok(0)
            }
            ShopCommand::Parse { transcript } => print_json(&uc.parse(&transcript)),
            ShopCommand::Categorize { name } => print_json(&serde_json::json!({
                "name": name,
                "category": uc.categorize(&name),
            })),
            ShopCommand::Search { query, price_range } => {
                print_json(&uc.search(&query, price_range))
            }
            ShopCommand::Similar { name } => {
                let list = self.app.input.load_list(list_path)?;
                print_json(&uc.similar(&name, &list))
            }
            ShopCommand::Recommend => {
                let list = self.app.input.load_list(list_path)?;
                let history = self.app.input.load_history(history_path)?;
                print_json(&uc.recommend(&list, &history))
            }
            ShopCommand::Substitutes { name } => print_json(&uc.substitutes(&name)),
            ShopCommand::Complements { name } => print_json(&uc.complements(&name)),
            ShopCommand::Suggest => {
                let list = self.app.input.load_list(list_path)?;
                print_json(&uc.smart_suggestions(&list))
            }
            ShopCommand::Alerts => {
                let history = self.app.input.load_history(history_path)?;
                print_json(&uc.low_stock_alerts(&history))
            }
            ShopCommand::Price { name } => print_json(&serde_json::json!({
                "name": name,
                "price": uc.price_for(&name),
            })),
            ShopCommand::Apply { transcript } => {
                let list = self.app.input.load_list(list_path)?;
                let (parsed, next, outcome) = uc.apply(&list, &transcript);
                print_json(&serde_json::json!({
                    "parsed": parsed,
                    "result": outcome,
                    "message": outcome.message(),
                    "list": next,
                }))
            }
            ShopCommand::Unknown(name) => Err(Error::invalid_argument(format!(
                "Unknown command '{}'.",
                name
            ))),
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<i32, Error> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{}", out);
    Ok(0)
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("shoplist: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match &outcome {
        ParseOutcome::Config(c) => c.clone(),
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(*shell);
            return Ok(0);
        }
    };
    // -d/--home-dir 指定時は SHOPLIST_HOME を設定し、ログ・カタログがその配下を使うようにする
    if let Some(ref h) = config.home_dir {
        std::env::set_var(HOME_ENV, h);
    }
    let app = wire_shoplist(config.now.as_deref())?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: shoplist [options] <command> [words...]");
}

fn print_help() {
    println!("Usage: shoplist [options] <command> [words...]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -d, --home-dir <directory>    Home directory (sets SHOPLIST_HOME for this process)");
    println!("  --list <file>                 Current shopping list (JSON array of items)");
    println!("  --history <file>              Purchase history (JSON array of entries)");
    println!("  --now <timestamp>             Use this time instead of the system clock (RFC3339)");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Commands:");
    println!("  parse <transcript...>         Parse a spoken/typed command into JSON");
    println!("  categorize <name...>          Show the category for an item name");
    println!("  search [--min N] [--max N] <query...>");
    println!("                                Search the product catalog by name or category");
    println!("  similar <name...>             Find list items similar to a name (uses --list)");
    println!("  recommend                     Frequent, due and seasonal recommendations");
    println!("  substitutes <name...>         Suggest substitutes for an item");
    println!("  complements <name...>         Suggest items that go well with an item");
    println!("  suggest                       Smart suggestions for the current list");
    println!("  alerts                        Essentials not bought recently (uses --history)");
    println!("  price <name...>               Show the price for an item");
    println!("  apply <transcript...>         Apply a command to the list and print the new list");
    println!();
    println!("Environment:");
    println!("  SHOPLIST_HOME   Home directory. Catalog override: $SHOPLIST_HOME/catalog.json;");
    println!("                  logs: $SHOPLIST_HOME/logs/shoplist.jsonl");
    println!("                  If unset, $XDG_CONFIG_HOME/shoplist (e.g. ~/.config/shoplist) is used.");
    println!();
    println!("Examples:");
    println!("  shoplist parse add 2 bottles of water");
    println!("  shoplist search --max 50 milk");
    println!("  shoplist --list list.json --history history.json recommend");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::parse_args_from;
    use crate::wiring::wire_shoplist_with;
    use common::domain::HomeDir;
    use common::ports::outbound::EnvResolver;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    /// 一時ディレクトリをホームとして返す EnvResolver
    struct TempHome(PathBuf);

    impl EnvResolver for TempHome {
        fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
            Ok(HomeDir::new(self.0.clone()))
        }
    }

    fn runner_in(home: &TempDir, now: Option<&str>) -> Runner {
        let resolver = Arc::new(TempHome(home.path().to_path_buf()));
        Runner {
            app: wire_shoplist_with(resolver, now).unwrap(),
        }
    }

    #[test]
    fn test_unknown_command_is_usage_error() {
        let home = tempdir().unwrap();
        let runner = runner_in(&home, Some("2026-06-01T00:00:00Z"));
        let err = runner
            .dispatch(ShopCommand::Unknown("frobnicate".into()), &Config::default())
            .unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_bad_now_is_rejected_by_wiring() {
        let home = tempdir().unwrap();
        let resolver = Arc::new(TempHome(home.path().to_path_buf()));
        assert_eq!(
            wire_shoplist_with(resolver, Some("last tuesday"))
                .err()
                .map(|e| e.exit_code()),
            Some(64)
        );
    }

    #[test]
    fn test_missing_list_file_is_io_error() {
        let home = tempdir().unwrap();
        let missing = home.path().join("list.json");
        let config = parse_args_from(&[
            "shoplist",
            "--list",
            missing.to_str().unwrap(),
            "suggest",
        ])
        .unwrap();
        let runner = runner_in(&home, Some("2026-06-01T00:00:00Z"));
        let err = runner.run(config).unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_help_and_parse_succeed() {
        let home = tempdir().unwrap();
        let runner = runner_in(&home, None);
        assert_eq!(runner.dispatch(ShopCommand::Help, &Config::default()).unwrap(), 0);
        let cmd = ShopCommand::Parse {
            transcript: "remove bread".into(),
        };
        assert_eq!(runner.dispatch(cmd, &Config::default()).unwrap(), 0);
    }

    #[test]
    fn test_logs_and_catalog_stay_under_home() {
        let home = tempdir().unwrap();
        std::fs::write(
            home.path().join("catalog.json"),
            r#"[{"name":"Kesar","category":"Pantry","price":400}]"#,
        )
        .unwrap();
        let runner = runner_in(&home, Some("2026-06-01T00:00:00Z"));
        assert_eq!(runner.app.use_case.price_for("Kesar"), 400);

        let config = parse_args_from(&["shoplist", "parse", "add", "milk"]).unwrap();
        assert_eq!(runner.run(config).unwrap(), 0);
        let log = std::fs::read_to_string(home.path().join("logs").join("shoplist.jsonl")).unwrap();
        assert!(log.contains("command started"));
        assert!(log.contains("transcript parsed"));
    }
}
