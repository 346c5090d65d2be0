/// ステータスコマンド
///
/// 保存済みの認証情報で Bunny Stream API にアクセスできるかを確認します。
use crate::commands::result::{CommandResult, StatusResult};
use anyhow::{Context, Result};
use bunny_stream::config::UserConfig;
use bunny_stream::{ApiError, ListVideosParams, StreamClient};

/// ステータスコマンドを実行
pub async fn execute() -> Result<CommandResult> {
    let config = UserConfig::load().context("Failed to load configuration file")?;

    let Some(auth) = config.auth.as_ref() else {
        return Ok(CommandResult::Status(StatusResult {
            is_authenticated: false,
            library_id: None,
            access_key: None,
        }));
    };

    let client = StreamClient::new(auth.library_id.clone(), auth.access_key.clone())
        .context("Failed to create API client")?;

    let is_authenticated = verify_credentials(&client).await?;

    Ok(CommandResult::Status(StatusResult {
        is_authenticated,
        library_id: Some(client.library_id().to_string()),
        access_key: Some(client.masked_access_key()),
    }))
}

/// 1件だけ一覧を取得して認証情報を確認する
///
/// 401 / 404（ライブラリが存在しない）は `false`、それ以外の失敗はエラー。
pub(crate) async fn verify_credentials(client: &StreamClient) -> Result<bool> {
    match client
        .list_videos(&ListVideosParams::default().per_page(1))
        .await
    {
        Ok(_) => Ok(true),
        Err(e) if matches!(e.kind(), ApiError::Unauthorized | ApiError::NotFound) => Ok(false),
        Err(e) => Err(e).context("Failed to verify credentials"),
    }
}
