/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層で
/// 人間向けと機械向けの出力フォーマットを決定する。
use serde::Serialize;
use serde_json::Value;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Login(LoginResult),
    Logout(LogoutResult),
    Status(StatusResult),
    List(ListResult),
    Show(VideoResult),
    Create(VideoResult),
    Upload(UploadResult),
    Action(ActionResult),
    Help,
}

/// ログインコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// 既にログイン済みだったか（上書き更新の場合true）
    pub was_logged_in: bool,
    pub library_id: String,
}

/// ログアウトコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResult {
    pub was_logged_in: bool,
}

/// ステータスコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    /// API が AccessKey を受け付けたか
    pub is_authenticated: bool,
    pub library_id: Option<String>,
    /// マスキングされた AccessKey
    pub access_key: Option<String>,
}

/// 一覧表示用に取り出した動画の情報
#[derive(Debug, Clone, Serialize)]
pub struct VideoSummary {
    pub guid: String,
    pub title: String,
    pub status: Option<i64>,
    /// 長さ（秒）
    pub length: Option<u64>,
    pub collection_id: Option<String>,
    pub date_uploaded: Option<String>,
}

impl VideoSummary {
    /// API の動画レコードから取り出す（欠けているフィールドは None / 空文字）
    pub fn from_record(record: &Value) -> Self {
        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            guid: text("guid").unwrap_or_default(),
            title: text("title").unwrap_or_default(),
            status: record.get("status").and_then(Value::as_i64),
            length: record.get("length").and_then(Value::as_u64),
            collection_id: text("collectionId").filter(|c| !c.is_empty()),
            date_uploaded: text("dateUploaded"),
        }
    }

    /// status コードの表示名
    pub fn status_label(&self) -> &'static str {
        match self.status {
            Some(0) => "created",
            Some(1) => "uploaded",
            Some(2) => "processing",
            Some(3) => "transcoding",
            Some(4) => "finished",
            Some(5) => "error",
            Some(6) => "upload failed",
            _ => "unknown",
        }
    }
}

/// 一覧コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    pub current_page: u64,
    pub items_per_page: u64,
    pub total_items: u64,
    pub videos: Vec<VideoSummary>,
}

impl ListResult {
    /// GET /videos のレスポンスから組み立てる
    pub fn from_response(response: &Value) -> Self {
        let number = |key: &str| response.get(key).and_then(Value::as_u64).unwrap_or(0);
        let videos: Vec<VideoSummary> = response
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(VideoSummary::from_record).collect())
            .unwrap_or_default();

        Self {
            current_page: number("currentPage"),
            items_per_page: number("itemsPerPage"),
            total_items: number("totalItems"),
            videos,
        }
    }
}

/// 単一の動画レコードを返すコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct VideoResult {
    pub summary: VideoSummary,
    /// API のレスポンスそのまま
    pub video: Value,
}

impl VideoResult {
    pub fn new(video: Value) -> Self {
        Self {
            summary: VideoSummary::from_record(&video),
            video,
        }
    }
}

/// アップロードコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct UploadResult {
    pub title: String,
    pub file_path: String,
    /// 既存の動画IDに上げた場合のみ
    pub video_id: Option<String>,
    pub response: Value,
}

/// 更新・削除など、API の応答をそのまま返すコマンドの種類
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Update,
    Delete,
    Thumbnail,
    Fetch,
    AddCaptions,
    DeleteCaptions,
}

/// 更新・削除などのコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    pub action: ActionKind,
    pub video_id: String,
    pub response: Value,
}

impl CommandResult {
    /// 成功メッセージを取得（人間向け出力用）
    pub fn success_message(&self) -> String {
        match self {
            CommandResult::Login(r) => {
                if r.was_logged_in {
                    "Login credentials updated!".to_string()
                } else {
                    "Login successful!".to_string()
                }
            }
            CommandResult::Logout(r) => {
                if r.was_logged_in {
                    "Logged out successfully.".to_string()
                } else {
                    "Already logged out.".to_string()
                }
            }
            CommandResult::Status(r) => {
                if r.is_authenticated {
                    "Authenticated".to_string()
                } else {
                    "Not authenticated".to_string()
                }
            }
            CommandResult::List(r) => format!("Found {} video(s).", r.total_items),
            CommandResult::Show(_) => "Video details".to_string(),
            CommandResult::Create(r) => format!("Video created: {}", r.summary.guid),
            CommandResult::Upload(_) => "Upload completed successfully!".to_string(),
            CommandResult::Action(r) => match r.action {
                ActionKind::Update => format!("Video {} updated.", r.video_id),
                ActionKind::Delete => format!("Video {} deleted.", r.video_id),
                ActionKind::Thumbnail => format!("Thumbnail set for video {}.", r.video_id),
                ActionKind::Fetch => format!("Fetch queued for video {}.", r.video_id),
                ActionKind::AddCaptions => format!("Captions added to video {}.", r.video_id),
                ActionKind::DeleteCaptions => {
                    format!("Captions deleted from video {}.", r.video_id)
                }
            },
            CommandResult::Help => "".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_video_summary_from_record() {
        let record = json!({
            "guid": "abc",
            "title": "Intro",
            "status": 4,
            "length": 61,
            "collectionId": "",
            "dateUploaded": "2025-01-02T03:04:05.000"
        });

        let summary = VideoSummary::from_record(&record);
        assert_eq!(summary.guid, "abc");
        assert_eq!(summary.title, "Intro");
        assert_eq!(summary.length, Some(61));
        assert_eq!(summary.collection_id, None);
        assert_eq!(summary.status_label(), "finished");
    }

    #[test]
    fn test_list_result_from_response() {
        let response = json!({
            "totalItems": 2,
            "currentPage": 1,
            "itemsPerPage": 10,
            "items": [{"guid": "a", "title": "A"}, {"guid": "b", "title": "B"}]
        });

        let result = ListResult::from_response(&response);
        assert_eq!(result.total_items, 2);
        assert_eq!(result.videos.len(), 2);
        assert_eq!(result.videos[1].guid, "b");
    }

    #[test]
    fn test_machine_output_is_tagged() {
        let result = CommandResult::Action(ActionResult {
            action: ActionKind::DeleteCaptions,
            video_id: "abc".to_string(),
            response: json!({"success": true}),
        });

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["command"], "action");
        assert_eq!(value["action"], "delete_captions");
        assert_eq!(result.success_message(), "Captions deleted from video abc.");
    }
}
