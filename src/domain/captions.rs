/// ドメインサービス: 字幕ファイルの読み込み
///
/// 字幕ファイル（WebVTT / SRT など）を読み込み、
/// API が受け付ける base64 文字列に変換する。
use crate::domain::error::DomainError;
use crate::domain::validator::validate_local_file;
use base64::{Engine as _, engine::general_purpose};
use std::path::Path;

/// 字幕ファイルを読み込み base64 (標準アルファベット・パディングあり) で返す
pub async fn read_captions_base64(file_path: &Path) -> Result<String, DomainError> {
    let validated = validate_local_file(file_path)?;

    let content = tokio::fs::read(&validated.path)
        .await
        .map_err(|e| DomainError::Unreadable {
            path: validated.path.display().to_string(),
            source: e,
        })?;

    Ok(encode_captions(&content))
}

/// バイト列を base64 に変換
pub fn encode_captions(content: &[u8]) -> String {
    general_purpose::STANDARD.encode(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_VTT: &str = "WEBVTT\n\n00:00.000 --> 00:01.000\nhello\n";

    #[tokio::test]
    async fn test_read_captions_base64() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("en.vtt");
        fs::write(&path, SAMPLE_VTT).expect("Failed to write captions");

        let encoded = read_captions_base64(&path)
            .await
            .expect("captions should encode");
        let decoded = general_purpose::STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), SAMPLE_VTT);
    }

    #[tokio::test]
    async fn test_missing_captions_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing.vtt");

        let err = read_captions_base64(&path).await.unwrap_err();
        assert!(err.is_file_missing());
    }

    #[test]
    fn test_encode_is_padded() {
        assert_eq!(encode_captions(b"ab"), "YWI=");
    }
}
