//! 設定管理モジュール
//!
//! このモジュールは2層の設定構造を提供します:
//! 1. AppConfig - ビルド時に確定する静的設定（APP_CONFIG）
//! 2. UserConfig - 実行時に読み込まれるユーザー設定（ライブラリIDとAccessKey）
//!
//! # 使用例
//!
//! ```no_run
//! use bunny_stream::config::{APP_CONFIG, UserConfig};
//!
//! let endpoint = APP_CONFIG.api.endpoint;
//!
//! let user_config = UserConfig::load()?;
//! let auth = user_config.get_auth()?;
//! # Ok::<(), bunny_stream::config::error::ConfigError>(())
//! ```
pub mod app;
pub mod error;
pub mod permissions;
pub mod user;

pub use app::APP_CONFIG;
pub use error::ConfigError;
pub use user::{AuthConfig, UserConfig};
