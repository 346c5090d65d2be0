use crate::commands::result::{CommandResult, VideoResult};
use anyhow::{Context, Result};

/// 動画の詳細を表示するコマンドを実行する
///
/// # 引数
/// * `video_id` - 取得する動画の GUID
pub async fn execute(video_id: &str) -> Result<CommandResult> {
    let client = super::connect()?;

    let video = client
        .get_video(video_id)
        .await
        .with_context(|| format!("Failed to fetch video {}", video_id))?;

    Ok(CommandResult::Show(VideoResult::new(video)))
}
