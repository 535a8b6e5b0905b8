//! 呼び出し側が渡すリスト・履歴（JSON 配列）の読み込み

use crate::domain::{HistoryEntry, ListItem};
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

pub struct JsonInputLoader {
    fs: Arc<dyn FileSystem>,
}

impl JsonInputLoader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// 買い物リスト。path が無ければ空のリスト。
    pub fn load_list(&self, path: Option<&Path>) -> Result<Vec<ListItem>, Error> {
        self.load_array(path)
    }

    /// 購入履歴。path が無ければ空の履歴。
    pub fn load_history(&self, path: Option<&Path>) -> Result<Vec<HistoryEntry>, Error> {
        self.load_array(path)
    }

    fn load_array<T: DeserializeOwned>(&self, path: Option<&Path>) -> Result<Vec<T>, Error> {
        let Some(path) = path else {
            return Ok(Vec::new());
        };
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
    }
}
