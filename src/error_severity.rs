//! エラー深刻度
//!
//! api / domain / config の各層のエラーが共通で返す分類。
//! CLI はこの分類だけを見て終了コードを決める。
//!
//! このモジュールは他のモジュールに依存しない。

use serde::Serialize;
use std::fmt;

/// エラーの深刻度と対応する終了コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    /// ユーザーが直せるエラー
    ///
    /// 動画IDが存在しない、ローカルファイルが見つからないなど。
    ///
    /// **Exit Code: 1**
    UserError,

    /// 設定エラー
    ///
    /// AccessKey が拒否された、設定ファイルが壊れているなど。
    ///
    /// **Exit Code: 2**
    ConfigError,

    /// システムエラー
    ///
    /// ネットワーク障害、想定外のステータスコードなど。
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// 対応する Unix 終了コードを返す
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserError => write!(f, "user error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SystemError => write!(f, "system error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorSeverity::UserError.exit_code(), 1);
        assert_eq!(ErrorSeverity::ConfigError.exit_code(), 2);
        assert_eq!(ErrorSeverity::SystemError.exit_code(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorSeverity::UserError.to_string(), "user error");
        assert_eq!(
            ErrorSeverity::ConfigError.to_string(),
            "configuration error"
        );
        assert_eq!(ErrorSeverity::SystemError.to_string(), "system error");
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&ErrorSeverity::ConfigError).unwrap();
        assert_eq!(json, "\"config_error\"");
    }
}
