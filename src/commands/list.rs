use crate::commands::result::{CommandResult, ListResult};
use anyhow::{Context, Result};
use bunny_stream::ListVideosParams;

/// リストコマンドを実行する
///
/// 指定ページの動画一覧を取得します（ページ送りはしない）。
pub async fn execute(params: ListVideosParams) -> Result<CommandResult> {
    let client = super::connect()?;

    let response = client
        .list_videos(&params)
        .await
        .context("Failed to fetch video list")?;

    Ok(CommandResult::List(ListResult::from_response(&response)))
}
