/// アプリケーション設定モジュール
///
/// ビルド時に確定する静的設定を管理します。
/// これらの設定は実行時には変更できません。

/// アプリケーション全体の設定
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub logging: LoggingConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    /// Bunny Stream API のベースURL（末尾にライブラリIDが付く）
    pub endpoint: &'static str,

    /// 接続確立のタイムアウト(秒)。全リクエストに適用
    pub connect_timeout_seconds: u64,

    /// JSON リクエスト全体のタイムアウト(秒)
    ///
    /// 動画アップロードの PUT には適用しない。
    pub request_timeout_seconds: u64,

    /// JSON リクエストの Content-Type
    pub content_type: &'static str,

    /// 動画アップロード（生バイナリ）の Content-Type
    pub upload_content_type: &'static str,
}

/// 動画一覧のデフォルト値
#[derive(Debug, Clone, Copy)]
pub struct ListConfig {
    pub default_page: u32,
    pub default_per_page: u32,
    pub default_sort_by: &'static str,
}

/// ロギング関連の設定
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig {
    /// RUST_LOG 未設定時のログレベル (trace, debug, info, warn, error)
    pub level: &'static str,
}

/// グローバル設定
pub const APP_CONFIG: AppConfig = AppConfig {
    api: ApiConfig {
        endpoint: "https://video.bunnycdn.com/library",
        connect_timeout_seconds: 30,
        request_timeout_seconds: 60,
        content_type: "application/json",
        upload_content_type: "application/octet-stream",
    },
    list: ListConfig {
        default_page: 1,
        default_per_page: 10,
        default_sort_by: "date",
    },
    logging: LoggingConfig { level: "warn" },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_values() {
        assert_eq!(APP_CONFIG.api.endpoint, "https://video.bunnycdn.com/library");
        assert_eq!(APP_CONFIG.api.connect_timeout_seconds, 30);
        assert!(APP_CONFIG.api.request_timeout_seconds >= APP_CONFIG.api.connect_timeout_seconds);
        assert!(!APP_CONFIG.api.endpoint.ends_with('/'));
    }

    #[test]
    fn test_list_defaults() {
        assert_eq!(APP_CONFIG.list.default_page, 1);
        assert_eq!(APP_CONFIG.list.default_per_page, 10);
        assert_eq!(APP_CONFIG.list.default_sort_by, "date");
    }
}
