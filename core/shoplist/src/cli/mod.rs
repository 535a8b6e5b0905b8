pub mod args;
pub mod command;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
pub use command::ShopCommand;
