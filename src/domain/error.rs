/// ドメイン層のエラー定義
///
/// リクエストを送る前のローカルファイル検証で発生するエラー。
/// 外部クレートのエラーは含まない。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// ファイルが見つからない
    #[error("File does not exist: {path}")]
    FileNotFound { path: String },

    /// ディレクトリが指定された（ファイルが期待される場所）
    #[error("'{path}' is a directory, not a file")]
    NotAFile { path: String },

    /// 読み込みに失敗した
    #[error("failed to read file: {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DomainError {
    /// ファイルが見つからないエラーを生成
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// ディレクトリ指定エラーを生成
    pub fn not_a_file(path: impl Into<String>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// ファイルが存在しないことを示すか
    pub fn is_file_missing(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileNotFound { .. } => ErrorSeverity::UserError,
            Self::NotAFile { .. } => ErrorSeverity::UserError,
            Self::Unreadable { .. } => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::FileNotFound { .. } => {
                Some("Please check the file path and ensure the file exists.")
            }
            Self::NotAFile { .. } => Some("Please specify a file, not a directory."),
            Self::Unreadable { .. } => Some("Check the file permissions."),
        }
    }
}
