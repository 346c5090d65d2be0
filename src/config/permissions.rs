/// ファイルパーミッション管理モジュール
///
/// AccessKey を含む config.toml を所有者のみがアクセス可能にします。
///
/// Unix系 (Linux, macOS): 0600 (rw-------)
/// その他: 何もしない
use crate::config::error::ConfigError;
use std::path::Path;

/// 認証情報ファイル用パーミッションを設定
///
/// # Errors
/// ファイルが存在しない場合、またはパーミッション設定に失敗した場合に ConfigError を返します。
pub fn set_token_file_permissions(file_path: &Path) -> Result<(), ConfigError> {
    if !file_path.exists() {
        return Err(ConfigError::file_system(
            format!("Config file not found: {}", file_path.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "File does not exist"),
        ));
    }

    #[cfg(unix)]
    {
        set_unix_permissions(file_path)
    }

    #[cfg(not(unix))]
    {
        // Windows はユーザープロファイル配下がデフォルトで本人のみアクセス可能
        Ok(())
    }
}

#[cfg(unix)]
fn set_unix_permissions(file_path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    let permissions = std::fs::Permissions::from_mode(0o600);
    std::fs::set_permissions(file_path, permissions).map_err(|e| {
        ConfigError::file_system(
            format!(
                "Failed to set permissions (0600) for config file: {}",
                file_path.display()
            ),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn test_unix_permissions_0600() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let test_file = temp_dir.path().join("config.toml");
        fs::write(&test_file, "access_key = \"x\"").expect("Failed to write test file");

        set_token_file_permissions(&test_file).expect("Failed to set permissions");

        let mode = fs::metadata(&test_file).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "Expected 0600 permissions, got 0o{:o}", mode);
    }

    #[test]
    fn test_nonexistent_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("config.toml");

        let result = set_token_file_permissions(&missing);
        assert!(matches!(result, Err(ConfigError::FileSystem { .. })));
    }
}
