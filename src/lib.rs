//! Bunny Stream API クライアント
//!
//! Stream Library の動画レコードの作成・一覧・更新・削除、
//! ファイルアップロード、サムネイル設定、外部URLからの取り込み、字幕管理を行う。
//!
//! ```no_run
//! use bunny_stream::{ListVideosParams, StreamClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StreamClient::new("12345", "library-api-key")?;
//! let page = client.list_videos(&ListVideosParams::default().search("intro")).await?;
//! println!("{}", page["totalItems"]);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error_severity;

pub use api::{ApiError, ListVideosParams, Operation, StreamClient, StreamError, StreamResult};
pub use error_severity::ErrorSeverity;
