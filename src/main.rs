mod cli;
mod commands;
mod logging;
mod presentation;

use bunny_stream::config::ConfigError;
use bunny_stream::domain::DomainError;
use bunny_stream::{ApiError, ErrorSeverity, StreamError};
use presentation::output::{self, ErrorReport};
use std::env;

#[tokio::main]
async fn main() {
    logging::init_tracing();

    let args: Vec<String> = env::args().collect();
    let parsed = cli::parse_global(&args);

    if parsed.rest.is_empty() {
        output::print_usage();
        return;
    }

    match cli::dispatch(&parsed.rest).await {
        Ok(result) => {
            if let Err(e) = output::output_result(&result, parsed.machine_output) {
                handle_error(e, parsed.machine_output);
            }
        }
        Err(e) => handle_error(e, parsed.machine_output),
    }
}

/// エラーハンドリングとユーザーへの表示
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とメッセージを決定する。
fn handle_error(error: anyhow::Error, machine_output: bool) {
    let severity = determine_severity(&error);
    let report = ErrorReport {
        error: error.to_string(),
        causes: error.chain().skip(1).map(|c| c.to_string()).collect(),
        exit_code: severity.map_or(1, ErrorSeverity::exit_code),
        severity,
        hint: get_error_hint(&error),
    };

    output::output_error(&report, machine_output);
    std::process::exit(report.exit_code);
}

/// エラーチェーンから深刻度を決定
///
/// 既知のエラー型が見つからなければ `None`（引数ミスなど）。
fn determine_severity(error: &anyhow::Error) -> Option<ErrorSeverity> {
    for cause in error.chain() {
        if let Some(err) = cause.downcast_ref::<StreamError>() {
            return Some(err.severity());
        }
        if let Some(err) = cause.downcast_ref::<ApiError>() {
            return Some(err.severity());
        }
        if let Some(err) = cause.downcast_ref::<DomainError>() {
            return Some(err.severity());
        }
        if let Some(err) = cause.downcast_ref::<ConfigError>() {
            return Some(err.severity());
        }
    }
    None
}

/// エラーチェーンから適切な終了コードを決定
///
/// 不明なエラーはユーザーエラー扱い。
fn determine_exit_code(error: &anyhow::Error) -> i32 {
    determine_severity(error).map_or(1, ErrorSeverity::exit_code)
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<String> {
    for cause in error.chain() {
        let hint = if let Some(err) = cause.downcast_ref::<StreamError>() {
            err.hint()
        } else if let Some(err) = cause.downcast_ref::<ApiError>() {
            err.hint()
        } else if let Some(err) = cause.downcast_ref::<DomainError>() {
            err.hint()
        } else if let Some(err) = cause.downcast_ref::<ConfigError>() {
            err.hint()
        } else {
            None
        };

        if let Some(hint) = hint {
            return Some(hint.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use bunny_stream::Operation;

    #[test]
    fn test_exit_code_from_stream_error() {
        let err: Result<(), StreamError> =
            Err(StreamError::new(Operation::GetVideo, ApiError::Unauthorized));
        let err = err.context("Show command failed").unwrap_err();

        assert_eq!(determine_exit_code(&err), 2);
        assert!(get_error_hint(&err).unwrap().contains("login"));
    }

    #[test]
    fn test_exit_code_from_missing_file() {
        let err: Result<(), StreamError> = Err(StreamError::new(
            Operation::AddCaptions,
            DomainError::file_not_found("en.vtt"),
        ));
        let err = err.context("Captions add command failed").unwrap_err();

        assert_eq!(determine_exit_code(&err), 1);
        assert!(get_error_hint(&err).is_some());
    }

    #[test]
    fn test_exit_code_from_unexpected_status() {
        let err = anyhow::Error::new(StreamError::new(
            Operation::ListVideos,
            ApiError::from_status(502, String::new()),
        ));
        assert_eq!(determine_exit_code(&err), 3);
        assert_eq!(determine_severity(&err), Some(ErrorSeverity::SystemError));
        assert_eq!(get_error_hint(&err), None);
    }

    #[test]
    fn test_unknown_error_defaults_to_one() {
        let err = anyhow::anyhow!("Unknown command: 'x'");
        assert_eq!(determine_exit_code(&err), 1);
        assert_eq!(determine_severity(&err), None);
    }
}
