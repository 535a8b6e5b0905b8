//! shoplist: 音声買い物リストのコマンド解釈と推薦
//!
//! 発話（文字列）を `ParsedCommand` に変換し、呼び出し側のリスト・履歴から推薦を作る。
//! 保存・画面・音声入力は扱わない。

pub mod adapter;
pub mod catalog;
pub mod domain;
pub mod fuzzy;
pub mod lexicon;
pub mod parser;
pub mod ports;
pub mod recommend;
pub mod usecase;

pub use catalog::Catalog;
pub use lexicon::Lexicon;
pub use parser::CommandParser;
pub use recommend::Recommender;

#[cfg(test)]
mod tests;
