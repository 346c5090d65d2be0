use crate::commands::result::{CommandResult, VideoResult};
use anyhow::{Context, Result};

/// 空の動画レコードを作成する
pub async fn execute(title: &str, collection_id: Option<&str>) -> Result<CommandResult> {
    let client = super::connect()?;

    let video = client
        .create_video(title, collection_id)
        .await
        .context("Failed to create video")?;

    Ok(CommandResult::Create(VideoResult::new(video)))
}
