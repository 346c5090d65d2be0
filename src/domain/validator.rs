/// ドメインサービス: ローカルファイル検証
///
/// アップロード元や字幕ファイルを、HTTPリクエストを送る前に検証する。
/// 存在しないパスに対してリクエストが飛ぶことはない。
use crate::domain::error::DomainError;
use std::path::{Path, PathBuf};

/// 検証済みのローカルファイル
#[derive(Debug, Clone)]
pub struct ValidatedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// ローカルファイルを検証する
///
/// # エラー
/// - ファイルが存在しない
/// - ディレクトリが指定された
pub fn validate_local_file(file_path: &Path) -> Result<ValidatedFile, DomainError> {
    let display = file_path.display().to_string();

    if !file_path.exists() {
        return Err(DomainError::file_not_found(display));
    }

    // メタデータが取れない場合も「存在しない」として扱う
    let metadata =
        std::fs::metadata(file_path).map_err(|_| DomainError::file_not_found(&display))?;

    if metadata.is_dir() {
        return Err(DomainError::not_a_file(display));
    }

    Ok(ValidatedFile {
        path: file_path.to_path_buf(),
        size: metadata.len(),
    })
}
