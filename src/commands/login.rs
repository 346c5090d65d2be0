/// ログインコマンド
///
/// ライブラリIDと AccessKey を受け取り、API で検証してから保存します。
use crate::commands::result::{CommandResult, LoginResult};
use crate::commands::status::verify_credentials;
use anyhow::{Context, Result, bail};
use bunny_stream::StreamClient;
use bunny_stream::config::UserConfig;

/// ログイン情報
#[derive(Debug)]
pub struct LoginCredentials {
    pub library_id: String,
    pub access_key: String,
}

/// ログインコマンドを実行
///
/// # Arguments
/// * `credentials` - プレゼンテーション層で取得済みの認証情報
pub async fn execute(credentials: LoginCredentials) -> Result<CommandResult> {
    let mut config = UserConfig::load().context("Failed to load configuration file")?;
    let was_logged_in = config.has_auth();

    let client = StreamClient::new(
        credentials.library_id.clone(),
        credentials.access_key.clone(),
    )
    .context("Failed to create API client")?;

    // 無効な認証情報は保存しない
    if !verify_credentials(&client).await? {
        bail!(
            "The access key was rejected for library {}.",
            credentials.library_id
        );
    }

    config.set_auth(credentials.library_id.clone(), credentials.access_key);
    config.save().context("Failed to save configuration file")?;

    Ok(CommandResult::Login(LoginResult {
        was_logged_in,
        library_id: credentials.library_id,
    }))
}
