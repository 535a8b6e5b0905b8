//! Ports & Adapters のポート定義
//!
//! - outbound: アプリが外界（価格の決め方・カタログの読み込み）に依頼するための trait
//! - inbound はバイナリ側（`inbound.rs`）に置く

pub mod outbound;
