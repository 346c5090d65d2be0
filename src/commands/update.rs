use crate::commands::result::{ActionKind, ActionResult, CommandResult};
use anyhow::{Context, Result};

/// 動画のタイトルとコレクションを更新する
pub async fn execute(video_id: &str, title: &str, collection_id: &str) -> Result<CommandResult> {
    let client = super::connect()?;

    let response = client
        .update_video(video_id, title, collection_id)
        .await
        .with_context(|| format!("Failed to update video {}", video_id))?;

    Ok(CommandResult::Action(ActionResult {
        action: ActionKind::Update,
        video_id: video_id.to_string(),
        response,
    }))
}
