/// ユーザー設定モジュール
///
/// 実行時にユーザーディレクトリから読み込まれる動的設定を管理します。
/// Windows: C:\Users\<User>\AppData\Roaming\bunny-stream\config.toml
/// macOS:   /Users/<User>/Library/Application Support/bunny-stream/config.toml
/// Linux:   /home/<user>/.config/bunny-stream/config.toml
///
/// 初回起動時にデフォルト値から自動的にconfig.tomlを作成します。
use crate::config::error::ConfigError;
use crate::config::permissions::set_token_file_permissions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// デフォルトのタイムゾーンオフセット（UTC）
const DEFAULT_TIMEZONE_OFFSET: i32 = 0;

/// タイムゾーンオフセットの最大値（+18時間 = 64800秒）
const MAX_TIMEZONE_OFFSET: i32 = 64800;

/// タイムゾーンオフセットの最小値（-18時間 = -64800秒）
const MIN_TIMEZONE_OFFSET: i32 = -64800;

/// Bunny Stream 認証設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Stream Library ID
    pub library_id: String,

    /// Stream Library の API Key（AccessKey ヘッダーに載る）
    pub access_key: String,
}

/// ユーザー設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// 認証情報
    pub auth: Option<AuthConfig>,

    /// タイムゾーンオフセット(秒単位)
    /// 例: UTC=0, JST(UTC+9)=32400, PST(UTC-8)=-28800
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset_seconds: i32,
}

fn default_timezone_offset() -> i32 {
    DEFAULT_TIMEZONE_OFFSET
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            auth: None,
            timezone_offset_seconds: DEFAULT_TIMEZONE_OFFSET,
        }
    }
}

impl UserConfig {
    /// ユーザー設定ファイルのパスを取得
    ///
    /// # Errors
    /// 設定ディレクトリが取得できない場合に ConfigError::DirectoryNotFound を返します。
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .ok_or_else(|| ConfigError::directory_not_found("Failed to get user config directory"))
            .map(|config_dir| config_dir.join("bunny-stream").join("config.toml"))
    }

    /// ユーザー設定を読み込む
    ///
    /// 設定ファイルが存在しない場合は、デフォルトテンプレートから自動的に作成します。
    /// 読み込み後、自動的に検証を実行します（Fail Fast）。
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスからユーザー設定を読み込む
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to read config file: {}", config_path.display()),
                e,
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::parse_error(
                format!("Failed to parse config file ({})", config_path.display()),
                e,
            )
        })?;

        config.validate()?;

        Ok(config)
    }

    /// デフォルト設定ファイルを作成
    fn create_default_config(config_path: &Path) -> Result<(), ConfigError> {
        Self::ensure_parent_dir(config_path)?;

        fs::write(config_path, Self::default_toml_content()).map_err(|e| {
            ConfigError::file_system(
                format!(
                    "Failed to create default config file: {}",
                    config_path.display()
                ),
                e,
            )
        })?;

        Ok(())
    }

    /// デフォルトTOML設定を生成
    fn default_toml_content() -> String {
        format!(
            r#"# Bunny Stream CLI - User Configuration
# Library ID and access key are set with 'bunny-stream login'

# Timezone offset in seconds used when displaying upload dates
# Examples: UTC=0, JST(UTC+9)=32400, PST(UTC-8)=-28800
timezone_offset_seconds = {}
"#,
            DEFAULT_TIMEZONE_OFFSET
        )
    }

    /// ユーザー設定を保存する
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// 指定パスへユーザー設定を保存する
    ///
    /// AccessKey を含むため、保存後に所有者のみ読み書き可能なパーミッションを設定します。
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        Self::ensure_parent_dir(config_path)?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::serialize_error("Failed to serialize config", e))?;

        fs::write(config_path, content).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to write config file: {}", config_path.display()),
                e,
            )
        })?;

        set_token_file_permissions(config_path)
    }

    fn ensure_parent_dir(config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::file_system(
                    format!("Failed to create config directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// ユーザー設定を検証
    ///
    /// # 検証内容
    /// - auth.library_id: 空文字列でないこと
    /// - auth.access_key: 空文字列でないこと
    /// - timezone_offset_seconds: ±18時間以内
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(auth) = &self.auth {
            Self::validate_auth_field(&auth.library_id, "library_id")?;
            Self::validate_auth_field(&auth.access_key, "access_key")?;
        }

        Self::validate_timezone_offset(self.timezone_offset_seconds)?;

        Ok(())
    }

    fn validate_auth_field(value: &str, field_name: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::validation_error(format!(
                "Authentication {} cannot be empty. Please run 'bunny-stream login' again.",
                field_name
            )));
        }
        Ok(())
    }

    fn validate_timezone_offset(offset: i32) -> Result<(), ConfigError> {
        if !(MIN_TIMEZONE_OFFSET..=MAX_TIMEZONE_OFFSET).contains(&offset) {
            return Err(ConfigError::validation_error(format!(
                "Invalid timezone offset '{}' seconds. Must be between {} and {} (±18 hours)",
                offset, MIN_TIMEZONE_OFFSET, MAX_TIMEZONE_OFFSET
            )));
        }
        Ok(())
    }

    /// 認証情報を設定
    pub fn set_auth(&mut self, library_id: String, access_key: String) {
        self.auth = Some(AuthConfig {
            library_id,
            access_key,
        });
    }

    /// 認証情報を取得
    ///
    /// # Errors
    /// 認証情報が設定されていない場合に ConfigError::CredentialsNotFound を返します。
    pub fn get_auth(&self) -> Result<&AuthConfig, ConfigError> {
        self.auth.as_ref().ok_or_else(|| {
            ConfigError::credentials_not_found(
                "Library ID and access key not found. Please run 'bunny-stream login' first.",
            )
        })
    }

    /// 認証情報が存在するかチェック
    pub fn has_auth(&self) -> bool {
        self.auth.is_some()
    }

    /// 認証情報を削除
    pub fn clear_auth(&mut self) {
        self.auth = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("bunny-stream").join("config.toml")
    }

    #[test]
    fn test_has_auth() {
        let mut config = UserConfig::default();
        assert!(!config.has_auth());

        config.set_auth("12345".to_string(), "key-abc".to_string());
        assert!(config.has_auth());
    }

    #[test]
    fn test_get_auth() {
        let mut config = UserConfig::default();

        let result = config.get_auth();
        assert!(matches!(
            result,
            Err(ConfigError::CredentialsNotFound { ref message }) if message.contains("login")
        ));

        config.set_auth("12345".to_string(), "key-abc".to_string());
        let auth = config.get_auth().unwrap();
        assert_eq!(auth.library_id, "12345");
        assert_eq!(auth.access_key, "key-abc");
    }

    #[test]
    fn test_clear_auth() {
        let mut config = UserConfig::default();
        config.set_auth("12345".to_string(), "key-abc".to_string());

        config.clear_auth();
        assert!(!config.has_auth());
        assert!(config.get_auth().is_err());
    }

    #[test]
    fn test_config_path() {
        let path = UserConfig::config_path().expect("Failed to get config path");
        assert!(path.to_string_lossy().contains("bunny-stream"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_config_path(&temp_dir);

        let mut config = UserConfig {
            auth: None,
            timezone_offset_seconds: 32400,
        };
        config.set_auth("98765".to_string(), "secret-key".to_string());
        config.save_to(&config_path).expect("Failed to save config");

        let loaded = UserConfig::load_from(&config_path).expect("Failed to load config");
        let auth = loaded.get_auth().expect("Auth should be present");
        assert_eq!(auth.library_id, "98765");
        assert_eq!(auth.access_key, "secret-key");
        assert_eq!(loaded.timezone_offset_seconds, 32400);
    }

    #[test]
    fn test_load_creates_default_if_not_exists() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_config_path(&temp_dir);

        let config = UserConfig::load_from(&config_path).expect("default config should load");
        assert!(!config.has_auth());
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).expect("Failed to read config");
        assert!(content.contains("timezone_offset_seconds"));
        assert!(content.contains("bunny-stream login"));
    }

    #[test]
    fn test_load_rejects_broken_toml() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_config_path(&temp_dir);
        fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        fs::write(&config_path, "auth = [not toml").unwrap();

        let result = UserConfig::load_from(&config_path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_library_id() {
        let mut config = UserConfig::default();
        config.set_auth("".to_string(), "key".to_string());

        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("library_id"))
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_access_key() {
        let mut config = UserConfig::default();
        config.set_auth("12345".to_string(), "   ".to_string());

        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("access_key"))
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_offset() {
        let config = UserConfig {
            auth: None,
            timezone_offset_seconds: 90000,
        };
        assert!(config.validate().is_err());
    }
}
