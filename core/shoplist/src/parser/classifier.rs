//! コマンド種別の判定

use crate::domain::CommandKind;
use crate::lexicon::Lexicon;

/// 小文字化済みの発話からコマンド種別を決める
///
/// キーワードの部分文字列一致を REMOVE > CLEAR > SEARCH > SHOW の順に調べ、最初に当たった種別を返す。
/// どれにも当たらなければ ADD。
pub fn classify(lexicon: &Lexicon, lower: &str) -> CommandKind {
    lexicon
        .commands
        .classification_order()
        .into_iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw.as_str())))
        .map(|(kind, _)| kind)
        .unwrap_or(CommandKind::Add)
}
