/// Bunny Stream クライアント
///
/// エンドポイントごとのメソッド。各メソッドはパスとボディを組み立てて
/// `ApiClient` に1リクエストを投げ、失敗時は操作名付きの `StreamError` を返す。
use crate::api::auth::AccessKey;
use crate::api::client::ApiClient;
use crate::api::error::{ApiError, Operation, StreamError, WithOperation};
use crate::api::types::{
    AddCaptionsRequest, CreateVideoRequest, FetchVideoRequest, ListVideosParams,
    SetThumbnailRequest, UpdateVideoRequest, non_empty,
};
use crate::config::APP_CONFIG;
use crate::domain::captions::read_captions_base64;
use crate::domain::error::DomainError;
use crate::domain::validator::validate_local_file;
use reqwest::Body;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// 操作結果の型
pub type StreamResult<T = Value> = Result<T, StreamError>;

/// Stream Library 単位のクライアント
///
/// ライブラリIDとAccessKeyは生成時に固定され、以後変更できない。
#[derive(Debug, Clone)]
pub struct StreamClient {
    api: ApiClient,
}

impl StreamClient {
    /// プロダクションのエンドポイントを使うクライアントを作成
    pub fn new(
        library_id: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Result<Self, ApiError> {
        Self::with_base_url(APP_CONFIG.api.endpoint, library_id, access_key)
    }

    /// ベースURLを指定してクライアントを作成
    pub fn with_base_url(
        base_url: impl Into<String>,
        library_id: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let api = ApiClient::new(base_url, library_id, AccessKey::new(access_key))?;
        Ok(Self { api })
    }

    pub fn library_id(&self) -> &str {
        self.api.library_id()
    }

    /// 表示用にマスキングした AccessKey
    pub fn masked_access_key(&self) -> String {
        self.api.access_key().masked()
    }

    /// 動画レコードを取得
    pub async fn get_video(&self, video_id: &str) -> StreamResult {
        self.api
            .get(&video_path(video_id), &[])
            .await
            .during(Operation::GetVideo)
    }

    /// 動画一覧を取得
    ///
    /// ページ送りはしない。指定したページだけを返す。
    pub async fn list_videos(&self, params: &ListVideosParams) -> StreamResult {
        self.api
            .get("/videos", &params.to_query())
            .await
            .during(Operation::ListVideos)
    }

    /// タイトルとコレクションを更新
    pub async fn update_video(
        &self,
        video_id: &str,
        title: &str,
        collection_id: &str,
    ) -> StreamResult {
        let body = UpdateVideoRequest {
            title,
            collection_id,
        };

        self.api
            .post(&video_path(video_id), &body)
            .await
            .during(Operation::UpdateVideo)
    }

    /// 動画を削除
    pub async fn delete_video(&self, video_id: &str) -> StreamResult {
        self.api
            .delete(&video_path(video_id))
            .await
            .during(Operation::DeleteVideo)
    }

    /// 空の動画レコードを作成
    ///
    /// 返ってくるレコードの `guid` がアップロード先の動画IDになる。
    pub async fn create_video(&self, title: &str, collection_id: Option<&str>) -> StreamResult {
        let body = CreateVideoRequest {
            title,
            collection_id: non_empty(collection_id),
        };

        self.api
            .post("/videos", &body)
            .await
            .during(Operation::CreateVideo)
    }

    /// 既存の動画レコードにファイルをアップロード
    ///
    /// ファイルはメモリに読み込まず、ストリームのまま PUT ボディとして送る。
    /// ファイルが存在しない場合はリクエストを送らずに失敗する。
    pub async fn upload_video_with_video_id(
        &self,
        video_id: &str,
        file_path: &Path,
    ) -> StreamResult {
        let validated = validate_local_file(file_path).during(Operation::UploadVideo)?;

        let file = tokio::fs::File::open(&validated.path)
            .await
            .map_err(|e| DomainError::Unreadable {
                path: validated.path.display().to_string(),
                source: e,
            })
            .during(Operation::UploadVideo)?;

        info!(video_id, size_bytes = validated.size, "uploading video file");

        self.api
            .put(&video_path(video_id), Body::from(file), validated.size)
            .await
            .during(Operation::UploadVideo)
    }

    /// 動画レコードを作成してからファイルをアップロード
    ///
    /// 作成に失敗した場合は `CreateVideo`、アップロードに失敗した場合は
    /// `UploadVideo` のエラーがそのまま返る。
    pub async fn upload_video(
        &self,
        title: &str,
        file_path: &Path,
        collection_id: Option<&str>,
    ) -> StreamResult {
        let created = self.create_video(title, collection_id).await?;

        let video_id = created
            .get("guid")
            .and_then(Value::as_str)
            .ok_or(ApiError::MissingField { field: "guid" })
            .during(Operation::UploadVideo)?;

        info!(video_id, title, "video record created");

        self.upload_video_with_video_id(video_id, file_path).await
    }

    /// サムネイルをURLから設定
    pub async fn set_video_thumbnail(&self, video_id: &str, thumbnail_url: &str) -> StreamResult {
        let body = SetThumbnailRequest { thumbnail_url };

        self.api
            .post(&format!("{}/thumbnail", video_path(video_id)), &body)
            .await
            .during(Operation::SetThumbnail)
    }

    /// 外部URLから動画を取り込ませる
    ///
    /// `headers` は取得元へのリクエストに付けるヘッダー。
    pub async fn fetch_video(
        &self,
        video_id: &str,
        source_url: &str,
        headers: Option<&BTreeMap<String, String>>,
    ) -> StreamResult {
        let body = FetchVideoRequest {
            url: source_url,
            headers: headers.filter(|h| !h.is_empty()),
        };

        self.api
            .post(&format!("{}/fetch", video_path(video_id)), &body)
            .await
            .during(Operation::FetchVideo)
    }

    /// 字幕を追加
    ///
    /// 字幕ファイルは base64 にしてボディに埋め込む。
    /// ファイルが存在しない場合はリクエストを送らずに失敗する。
    pub async fn add_video_captions(
        &self,
        video_id: &str,
        srclang: &str,
        captions_path: &Path,
        label: Option<&str>,
    ) -> StreamResult {
        let captions_file = read_captions_base64(captions_path)
            .await
            .during(Operation::AddCaptions)?;

        let body = AddCaptionsRequest {
            captions_file,
            srclang,
            label: non_empty(label),
        };

        self.api
            .post(&captions_path_for(video_id, srclang), &body)
            .await
            .during(Operation::AddCaptions)
    }

    /// 字幕を削除
    pub async fn delete_video_captions(&self, video_id: &str, srclang: &str) -> StreamResult {
        self.api
            .delete(&captions_path_for(video_id, srclang))
            .await
            .during(Operation::DeleteCaptions)
    }
}

fn video_path(video_id: &str) -> String {
    format!("/videos/{}", video_id)
}

fn captions_path_for(video_id: &str, srclang: &str) -> String {
    format!("/videos/{}/captions/{}", video_id, srclang)
}
