use crate::commands::result::{CommandResult, UploadResult};
use anyhow::{Context, Result};
use std::path::Path;

/// アップロードコマンドを実行する
///
/// 動画レコードを作成し、そこへファイルをアップロードします。
/// タイトル未指定時はファイル名（拡張子なし）を使います。
pub async fn execute(
    file_path: &str,
    title: Option<&str>,
    collection_id: Option<&str>,
) -> Result<CommandResult> {
    let client = super::connect()?;
    let path = Path::new(file_path);
    let title = title
        .map(str::to_string)
        .unwrap_or_else(|| default_title(path));

    let response = client
        .upload_video(&title, path, collection_id)
        .await
        .with_context(|| format!("Failed to upload {}", file_path))?;

    Ok(CommandResult::Upload(UploadResult {
        title,
        file_path: file_path.to_string(),
        video_id: None,
        response,
    }))
}

/// 既存の動画レコードへアップロードする
pub async fn execute_to_existing(video_id: &str, file_path: &str) -> Result<CommandResult> {
    let client = super::connect()?;

    let response = client
        .upload_video_with_video_id(video_id, Path::new(file_path))
        .await
        .with_context(|| format!("Failed to upload {} to video {}", file_path, video_id))?;

    Ok(CommandResult::Upload(UploadResult {
        title: String::new(),
        file_path: file_path.to_string(),
        video_id: Some(video_id.to_string()),
        response,
    }))
}

fn default_title(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        assert_eq!(default_title(Path::new("/videos/intro.mp4")), "intro");
        assert_eq!(default_title(Path::new("clip")), "clip");
    }
}
