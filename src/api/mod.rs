//! Bunny Stream API クライアント
//!
//! - `client`: リクエストディスパッチャ（URL・AccessKey・ステータス変換）
//! - `stream`: エンドポイントごとのメソッド
//! - `auth`: AccessKey
//! - `types`: リクエストボディとクエリ
//! - `error`: `ApiError` / `StreamError`

pub mod auth;
pub mod client;
pub mod error;
pub mod stream;
pub mod types;

pub use error::{ApiError, Operation, StreamError};
pub use stream::{StreamClient, StreamResult};
pub use types::ListVideosParams;
