use crate::commands::result::{ActionKind, ActionResult, CommandResult};
use anyhow::{Context, Result};

/// サムネイルを URL から設定する
pub async fn execute(video_id: &str, thumbnail_url: &str) -> Result<CommandResult> {
    let client = super::connect()?;

    let response = client
        .set_video_thumbnail(video_id, thumbnail_url)
        .await
        .with_context(|| format!("Failed to set thumbnail for video {}", video_id))?;

    Ok(CommandResult::Action(ActionResult {
        action: ActionKind::Thumbnail,
        video_id: video_id.to_string(),
        response,
    }))
}
