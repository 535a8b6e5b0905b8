//! shoplist 共通ライブラリ
//!
//! `shoplist` コアと CLI で共有されるエラー型・ポート・標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート（trait）
pub mod ports;

/// 標準アダプタ（ポートの実装）
pub mod adapter;
