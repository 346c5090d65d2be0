use crate::commands::result::{ActionKind, ActionResult, CommandResult};
use anyhow::{Context, Result};
use std::path::Path;

/// 字幕を追加する
///
/// # 引数
/// * `srclang` - 言語コード（例: "en"）
/// * `file_path` - 字幕ファイル（WebVTT / SRT）
pub async fn add(
    video_id: &str,
    srclang: &str,
    file_path: &str,
    label: Option<&str>,
) -> Result<CommandResult> {
    let client = super::connect()?;

    let response = client
        .add_video_captions(video_id, srclang, Path::new(file_path), label)
        .await
        .with_context(|| format!("Failed to add '{}' captions to video {}", srclang, video_id))?;

    Ok(CommandResult::Action(ActionResult {
        action: ActionKind::AddCaptions,
        video_id: video_id.to_string(),
        response,
    }))
}

/// 字幕を削除する
pub async fn delete(video_id: &str, srclang: &str) -> Result<CommandResult> {
    let client = super::connect()?;

    let response = client
        .delete_video_captions(video_id, srclang)
        .await
        .with_context(|| {
            format!(
                "Failed to delete '{}' captions from video {}",
                srclang, video_id
            )
        })?;

    Ok(CommandResult::Action(ActionResult {
        action: ActionKind::DeleteCaptions,
        video_id: video_id.to_string(),
        response,
    }))
}
