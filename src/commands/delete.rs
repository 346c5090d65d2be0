use crate::commands::result::{ActionKind, ActionResult, CommandResult};
use anyhow::{Context, Result};

/// 削除コマンドを実行する
///
/// # 引数
/// * `video_id` - 削除対象の動画 GUID
pub async fn execute(video_id: &str) -> Result<CommandResult> {
    let client = super::connect()?;

    let response = client
        .delete_video(video_id)
        .await
        .with_context(|| format!("Failed to delete video {}", video_id))?;

    Ok(CommandResult::Action(ActionResult {
        action: ActionKind::Delete,
        video_id: video_id.to_string(),
        response,
    }))
}
