/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読）または
/// 機械向け（JSON）形式で出力する責務を担います。
/// CLI使用方法の表示もこのモジュールが担当します。
use crate::commands::result::{CommandResult, VideoSummary};
use anyhow::Result;
use bunny_stream::ErrorSeverity;
use bunny_stream::config::UserConfig;
use bunny_stream::domain::formatter::{format_length, format_upload_date};
use serde::Serialize;
use serde_json::Value;

/// ヘルプテキスト（単一の情報源）
const HELP_TEXT: &str = "bunny-stream
Manage Bunny Stream videos from the command line

Usage:
  bunny-stream [--machine] <command> [args...]

Global Flags:
  --machine        - Output machine-readable JSON to stdout (for scripting)
                     Works for both success and error cases

Available commands:
  login [--stdin]  - Save your library ID and API key
                     With --stdin: line 1 = Library ID, line 2 = API Key
  logout           - Remove saved credentials
  status           - Check that the saved credentials are accepted
  list [--page N] [--per-page N] [--sort-by FIELD] [--search TEXT] [--collection ID]
                   - List videos in the library (one page)
  show <video_id>  - Show a single video record
  create <title> [--collection ID]
                   - Create an empty video record
  update <video_id> <title> <collection_id>
                   - Update title and collection of a video
  delete <video_id>
                   - Delete a video
  upload <file> [--title TITLE] [--collection ID]
                   - Create a video record and upload the file into it
  upload-to <video_id> <file>
                   - Upload a file into an existing video record
  thumbnail <video_id> <url>
                   - Set the video thumbnail from a URL
  fetch <video_id> <url> [--header 'Name: value']...
                   - Let Bunny Stream fetch the video from a remote URL
  captions add <video_id> <lang> <file> [--label LABEL]
                   - Add a caption track (WebVTT / SRT)
  captions delete <video_id> <lang>
                   - Delete a caption track
  help             - Display this help message

Logging:
  RUST_LOG=debug bunny-stream list   - Log requests to stderr";

/// コマンド使用方法を表示する
pub fn print_usage() {
    eprintln!("{}", HELP_TEXT);
}

/// コマンド結果を適切な形式で出力する
///
/// * `machine_output = false`: 人間向けの詳細メッセージ（stderr）
/// * `machine_output = true`: 機械可読JSON（stdout）
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        println!("{}", serde_json::to_string(&machine_json(result)?)?);
    } else {
        output_human_readable(result);
    }
    Ok(())
}

/// エラー出力用の情報
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub causes: Vec<String>,
    pub exit_code: i32,
    pub severity: Option<ErrorSeverity>,
    pub hint: Option<String>,
}

/// エラーを出力する
pub fn output_error(report: &ErrorReport, machine_output: bool) {
    if machine_output {
        println!("{}", error_json(report));
        return;
    }

    eprintln!("Error: {}", report.error);
    if !report.causes.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in report.causes.iter().enumerate() {
            eprintln!("  {}: {}", i + 1, cause);
        }
    }
    if let Some(hint) = &report.hint {
        eprintln!("\nHint: {}", hint);
    }
}

/// エラー用の機械可読JSONを組み立てる
fn error_json(report: &ErrorReport) -> Value {
    serde_json::json!({
        "success": false,
        "error": report.error,
        "causes": report.causes,
        "exit_code": report.exit_code,
        "severity": report.severity,
        "hint": report.hint,
    })
}

/// 機械可読JSONを組み立てる
///
/// `CommandResult` のシリアライズ結果に `"success": true` を加えたもの。
fn machine_json(result: &CommandResult) -> Result<Value> {
    let mut json = serde_json::to_value(result)?;
    if let Value::Object(map) = &mut json {
        map.insert("success".to_string(), Value::Bool(true));
    }
    Ok(json)
}

/// 表示用タイムゾーンオフセット（設定が読めなければ UTC）
fn timezone_offset() -> i32 {
    UserConfig::load()
        .map(|c| c.timezone_offset_seconds)
        .unwrap_or(0)
}

/// 人間向けの詳細メッセージを出力（stderr）
///
/// stdout はパイプライン用に予約されます。
fn output_human_readable(result: &CommandResult) {
    match result {
        CommandResult::Login(r) => {
            eprintln!();
            eprintln!("{}", result.success_message());
            eprintln!("Credentials for library {} have been saved.", r.library_id);
        }
        CommandResult::Logout(r) => {
            eprintln!("{}", result.success_message());
            if r.was_logged_in {
                eprintln!("Saved credentials have been removed.");
            }
        }
        CommandResult::Status(r) => {
            eprintln!();
            match (&r.library_id, &r.access_key) {
                (Some(library_id), Some(access_key)) => {
                    if r.is_authenticated {
                        eprintln!("Authenticated");
                    } else {
                        eprintln!("✗ Authentication failed");
                    }
                    eprintln!("Library ID: {}", library_id);
                    eprintln!("API Key:    {}", access_key);
                    if !r.is_authenticated {
                        eprintln!();
                        eprintln!("Please run 'bunny-stream login' to update your credentials.");
                    }
                }
                _ => {
                    eprintln!("Not logged in");
                    eprintln!("Please run 'bunny-stream login' to authenticate.");
                }
            }
        }
        CommandResult::List(r) => {
            eprintln!();
            if r.videos.is_empty() {
                eprintln!("No videos found.");
                return;
            }

            let offset = timezone_offset();
            eprintln!(
                "Page {} ({} per page), {} video(s) in total:",
                r.current_page, r.items_per_page, r.total_items
            );
            eprintln!();
            for video in &r.videos {
                eprintln!("---");
                print_summary(video, offset);
            }
            eprintln!("---");
        }
        CommandResult::Show(r) | CommandResult::Create(r) => {
            eprintln!();
            if matches!(result, CommandResult::Create(_)) {
                eprintln!("{}", result.success_message());
                eprintln!();
            }
            eprintln!("Video Details:");
            eprintln!("==============");
            print_summary(&r.summary, timezone_offset());
            eprintln!();
        }
        CommandResult::Upload(r) => {
            eprintln!("\n{}", result.success_message());
            eprintln!("---");
            eprintln!("File:     {}", r.file_path);
            match &r.video_id {
                Some(video_id) => eprintln!("Video ID: {}", video_id),
                None => eprintln!("Title:    {}", r.title),
            }
            eprintln!("---");
        }
        CommandResult::Action(_) => {
            eprintln!("{}", result.success_message());
        }
        CommandResult::Help => {
            eprintln!("{}", HELP_TEXT);
        }
    }
}

fn print_summary(video: &VideoSummary, offset: i32) {
    eprintln!("Video ID:   {}", video.guid);
    eprintln!("Title:      {}", video.title);
    eprintln!("Status:     {}", video.status_label());
    if let Some(length) = video.length {
        eprintln!("Length:     {}", format_length(length));
    }
    if let Some(collection_id) = &video.collection_id {
        eprintln!("Collection: {}", collection_id);
    }
    if let Some(date) = &video.date_uploaded {
        eprintln!("Uploaded:   {}", format_upload_date(date, offset));
    }
}
