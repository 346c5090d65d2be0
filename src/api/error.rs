/// API層のエラー定義
///
/// `ApiError` は失敗の種類（転送・401・404・想定外ステータス・ローカルファイル）、
/// `StreamError` はどの操作で失敗したかを付けたもの。
/// #[source] を使って原因連鎖を保持する。
use crate::domain::error::DomainError;
use crate::error_severity::ErrorSeverity;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// 転送エラー（接続失敗、タイムアウトなど）
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP 401
    #[error("Unauthorized; check API key.")]
    Unauthorized,

    /// HTTP 404
    #[error("Not found.")]
    NotFound,

    /// 200 / 401 / 404 以外のステータス
    #[error("An unknown error occured. Status code: {status_code}")]
    UnexpectedStatus { status_code: u16, body: String },

    /// ローカルファイルの問題（存在しない・ディレクトリ・読み込み失敗）
    #[error(transparent)]
    LocalFile(#[from] DomainError),

    /// レスポンスのJSONデコード失敗
    #[error("failed to parse JSON response")]
    Decode(#[source] serde_json::Error),

    /// レスポンスに必要なフィールドがない
    #[error("response is missing field '{field}'")]
    MissingField { field: &'static str },
}

impl ApiError {
    pub fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    /// ステータスコードからエラーを生成（200 は呼び出し側で処理済み）
    pub fn from_status(status_code: u16, body: String) -> Self {
        match status_code {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            _ => Self::UnexpectedStatus { status_code, body },
        }
    }

    /// ローカルファイルが存在しないことによる失敗か
    pub fn is_file_missing(&self) -> bool {
        matches!(self, Self::LocalFile(e) if e.is_file_missing())
    }

    /// HTTPステータスコード（ステータス由来のエラーの場合）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::NotFound => Some(404),
            Self::UnexpectedStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unauthorized => ErrorSeverity::ConfigError,
            Self::NotFound => ErrorSeverity::UserError,
            Self::LocalFile(e) => e.severity(),
            Self::Transport { .. }
            | Self::UnexpectedStatus { .. }
            | Self::Decode(_)
            | Self::MissingField { .. } => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Unauthorized => Some(
                "The library ID or access key was rejected. Run 'bunny-stream login' to update them.",
            ),
            Self::NotFound => Some("Check the video ID, caption language and library ID."),
            Self::Transport { .. } => Some("Check your network connection and try again."),
            Self::LocalFile(e) => e.hint(),
            Self::UnexpectedStatus { .. } | Self::Decode(_) | Self::MissingField { .. } => None,
        }
    }
}

/// 失敗した操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetVideo,
    ListVideos,
    UpdateVideo,
    DeleteVideo,
    CreateVideo,
    UploadVideo,
    SetThumbnail,
    FetchVideo,
    AddCaptions,
    DeleteCaptions,
}

impl Operation {
    /// 操作ごとの失敗メッセージ
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::GetVideo => "Could not retrieve video.",
            Self::ListVideos => "Could not retrieve list of videos.",
            Self::UpdateVideo => "Error updating video.",
            Self::DeleteVideo => "Could not delete video.",
            Self::CreateVideo => "Could not create video.",
            Self::UploadVideo => "Upload failed.",
            Self::SetThumbnail => "Could not set video thumbnail.",
            Self::FetchVideo => "Could not fetch video.",
            Self::AddCaptions => "Could not add captions.",
            Self::DeleteCaptions => "Could not delete captions.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// 操作コンテキスト付きのエラー
///
/// Display は操作の失敗メッセージ、`source()` は元の `ApiError`。
#[derive(Error, Debug)]
#[error("{operation}")]
pub struct StreamError {
    pub operation: Operation,
    #[source]
    pub kind: ApiError,
}

impl StreamError {
    pub fn new(operation: Operation, kind: impl Into<ApiError>) -> Self {
        Self {
            operation,
            kind: kind.into(),
        }
    }

    /// 失敗の種類
    pub fn kind(&self) -> &ApiError {
        &self.kind
    }

    /// 失敗メッセージと原因を1行にまとめた文字列
    ///
    /// 例: "Could not retrieve video. Error: Not found."
    pub fn detailed_message(&self) -> String {
        format!("{} Error: {}", self.operation, self.kind)
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.kind.severity()
    }

    pub fn hint(&self) -> Option<&str> {
        self.kind.hint()
    }
}

/// `Result<T, ApiError>` に操作コンテキストを付ける
pub(crate) trait WithOperation<T> {
    fn during(self, operation: Operation) -> Result<T, StreamError>;
}

impl<T, E: Into<ApiError>> WithOperation<T> for Result<T, E> {
    fn during(self, operation: Operation) -> Result<T, StreamError> {
        self.map_err(|e| StreamError::new(operation, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            ApiError::from_status(401, String::new()),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(404, String::new()),
            ApiError::NotFound
        ));
        match ApiError::from_status(500, "boom".to_string()) {
            ApiError::UnexpectedStatus { status_code, body } => {
                assert_eq!(status_code, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::Unauthorized.to_string(),
            "Unauthorized; check API key."
        );
        assert_eq!(ApiError::NotFound.to_string(), "Not found.");
        assert_eq!(
            ApiError::from_status(503, String::new()).to_string(),
            "An unknown error occured. Status code: 503"
        );
    }

    #[test]
    fn test_stream_error_display_and_source() {
        let err = StreamError::new(Operation::GetVideo, ApiError::NotFound);
        assert_eq!(err.to_string(), "Could not retrieve video.");
        assert_eq!(
            err.detailed_message(),
            "Could not retrieve video. Error: Not found."
        );

        let source = std::error::Error::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "Not found.");
    }

    #[test]
    fn test_file_missing_detection() {
        let err = ApiError::from(DomainError::file_not_found("/nope.vtt"));
        assert!(err.is_file_missing());
        assert_eq!(err.severity(), ErrorSeverity::UserError);
        assert!(!ApiError::NotFound.is_file_missing());
    }

    #[test]
    fn test_severity() {
        assert_eq!(ApiError::Unauthorized.severity(), ErrorSeverity::ConfigError);
        assert_eq!(ApiError::NotFound.severity(), ErrorSeverity::UserError);
        assert_eq!(
            ApiError::from_status(500, String::new()).severity(),
            ErrorSeverity::SystemError
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(ApiError::Unauthorized.status_code(), Some(401));
        assert_eq!(ApiError::from_status(418, String::new()).status_code(), Some(418));
        assert_eq!(
            ApiError::MissingField { field: "guid" }.status_code(),
            None
        );
    }
}
