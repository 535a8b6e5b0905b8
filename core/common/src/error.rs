//! エラーハンドリング
//!
//! CLI 境界では `exit_code()` で終了コードに変換する（sysexits 準拠）。

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),
    /// 入力データ不正（EX_DATAERR）
    #[error("Invalid JSON: {0}")]
    Json(String),
    /// ファイル I/O（EX_IOERR）
    #[error("{0}")]
    Io(String),
    /// 環境変数・設定の解決失敗（EX_CONFIG）
    #[error("{0}")]
    Env(String),
    /// 内部エラー（EX_SOFTWARE）
    #[error("{0}")]
    System(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// JSON パース／シリアライズ失敗
    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// 環境変数・設定エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// 終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Json(_) => 65,
            Error::System(_) => 70,
            Error::Io(_) => 74,
            Error::Env(_) => 78,
        }
    }

    /// 引数不正かどうか（usage を併記するかの判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io_msg(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::json(e.to_string())
    }
}
