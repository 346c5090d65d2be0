pub mod captions;
pub mod create;
pub mod delete;
pub mod fetch;
pub mod help;
pub mod list;
pub mod login;
pub mod logout;
pub mod result;
pub mod show;
pub mod status;
pub mod thumbnail;
pub mod update;
pub mod upload;

pub use result::CommandResult;

use anyhow::{Context, Result};
use bunny_stream::StreamClient;
use bunny_stream::config::UserConfig;

/// 保存済みの認証情報からクライアントを作成する
///
/// 全 API コマンドの共通前処理。
pub(crate) fn connect() -> Result<StreamClient> {
    let user_config = UserConfig::load()
        .context("Failed to load user configuration. Please check your config.toml file.")?;

    let auth = user_config
        .get_auth()
        .context("Credentials not found. Please run 'bunny-stream login' first.")?;

    StreamClient::new(auth.library_id.clone(), auth.access_key.clone())
        .context("Failed to create API client")
}
