/// HTTPクライアント
///
/// Bunny Stream API との通信を担当するリクエストディスパッチャ。
/// URL構築、AccessKey ヘッダー、タイムアウト、ステータスコードの変換を行う。
///
/// 接続タイムアウトは全リクエスト共通。リクエスト全体のタイムアウトは
/// JSON リクエストにだけ付け、転送時間がファイルサイズに比例する PUT には付けない。
use crate::api::auth::{ACCESS_KEY_HEADER, AccessKey};
use crate::api::error::ApiError;
use crate::config::APP_CONFIG;
use reqwest::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Body, Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// APIクライアントの結果型
pub type ApiResult<T> = Result<T, ApiError>;

/// APIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    library_id: String,
    access_key: AccessKey,
    request_timeout: Duration,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成
    ///
    /// # Arguments
    /// * `base_url` - APIのベースURL（例: "https://video.bunnycdn.com/library"）
    /// * `library_id` - Stream Library ID
    /// * `access_key` - Stream Library の API Key
    pub fn new(
        base_url: impl Into<String>,
        library_id: impl Into<String>,
        access_key: AccessKey,
    ) -> ApiResult<Self> {
        Self::with_timeouts(
            base_url,
            library_id,
            access_key,
            Duration::from_secs(APP_CONFIG.api.connect_timeout_seconds),
            Duration::from_secs(APP_CONFIG.api.request_timeout_seconds),
        )
    }

    /// タイムアウトを指定してAPIクライアントを作成
    ///
    /// * `connect_timeout` - 接続確立までの上限（全リクエスト）
    /// * `request_timeout` - GET / POST / DELETE 全体の上限
    pub fn with_timeouts(
        base_url: impl Into<String>,
        library_id: impl Into<String>,
        access_key: AccessKey,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> ApiResult<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ApiError::transport("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            library_id: library_id.into(),
            access_key,
            request_timeout,
        })
    }

    /// プロダクション環境のクライアントを作成
    pub fn production(library_id: impl Into<String>, access_key: AccessKey) -> ApiResult<Self> {
        Self::new(APP_CONFIG.api.endpoint, library_id, access_key)
    }

    pub fn library_id(&self) -> &str {
        &self.library_id
    }

    pub fn access_key(&self) -> &AccessKey {
        &self.access_key
    }

    /// GETリクエストを送信
    ///
    /// # Arguments
    /// * `endpoint` - エンドポイントパス（例: "/videos/{id}"）
    /// * `query` - クエリパラメータ
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        let request = self
            .build_request(Method::GET, endpoint, APP_CONFIG.api.content_type)
            .timeout(self.request_timeout)
            .query(query);

        self.dispatch(request, Method::GET, endpoint).await
    }

    /// JSONボディ付きPOSTリクエストを送信
    pub async fn post<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> ApiResult<Value> {
        let request = self
            .build_request(Method::POST, endpoint, APP_CONFIG.api.content_type)
            .timeout(self.request_timeout)
            .json(body);

        self.dispatch(request, Method::POST, endpoint).await
    }

    /// PUTリクエストを送信（動画ファイルのアップロード用）
    ///
    /// # Arguments
    /// * `endpoint` - エンドポイントパス
    /// * `body` - アップロードするデータ（ファイルならストリームのまま）
    /// * `content_length` - ボディのバイト数
    pub async fn put(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
        content_length: u64,
    ) -> ApiResult<Value> {
        let request = self
            .build_request(Method::PUT, endpoint, APP_CONFIG.api.upload_content_type)
            .header(CONTENT_LENGTH, content_length)
            .body(body);

        self.dispatch(request, Method::PUT, endpoint).await
    }

    /// DELETEリクエストを送信
    pub async fn delete(&self, endpoint: &str) -> ApiResult<Value> {
        let request = self
            .build_request(Method::DELETE, endpoint, APP_CONFIG.api.content_type)
            .timeout(self.request_timeout);

        self.dispatch(request, Method::DELETE, endpoint).await
    }

    /// URLを構築
    ///
    /// `{base_url}/{library_id}{endpoint}`
    pub fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}{}",
            self.base_url.trim_end_matches('/'),
            self.library_id,
            endpoint
        )
    }

    /// AccessKey と Content-Type を付与したリクエストを構築
    fn build_request(&self, method: Method, endpoint: &str, content_type: &str) -> RequestBuilder {
        self.client
            .request(method, self.build_url(endpoint))
            .header(ACCESS_KEY_HEADER, self.access_key.header_value())
            .header(CONTENT_TYPE, content_type)
            .header(ACCEPT, "application/json")
    }

    /// 送信・ステータス判定・JSONデコードをまとめて行う
    async fn dispatch(
        &self,
        request: RequestBuilder,
        method: Method,
        endpoint: &str,
    ) -> ApiResult<Value> {
        debug!(%method, endpoint, library_id = %self.library_id, "sending request");

        let response = Self::send_with_error_handling(request, &method, endpoint).await?;
        let body = Self::check_response(response, &method, endpoint).await?;

        Self::parse_json(&body)
    }

    /// リクエストを送信し、転送エラーを変換する
    async fn send_with_error_handling(
        request: RequestBuilder,
        method: &Method,
        endpoint: &str,
    ) -> ApiResult<Response> {
        request.send().await.map_err(|e| {
            let message = if e.is_timeout() {
                format!("{} {} timed out", method, endpoint)
            } else if e.is_connect() {
                format!("Connection failed for {} {}", method, endpoint)
            } else {
                format!("Request failed for {} {}", method, endpoint)
            };
            ApiError::transport(message, e)
        })
    }

    /// ステータスコードを判定し、200 ならボディを返す
    ///
    /// 401 → Unauthorized, 404 → NotFound, それ以外 → UnexpectedStatus
    async fn check_response(
        response: Response,
        method: &Method,
        endpoint: &str,
    ) -> ApiResult<String> {
        let status = response.status();

        if status == StatusCode::OK {
            return response.text().await.map_err(|e| {
                ApiError::transport(
                    format!("Failed to read response body for {} {}", method, endpoint),
                    e,
                )
            });
        }

        let status_code = status.as_u16();
        warn!(%method, endpoint, status_code, "request rejected");

        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        Err(ApiError::from_status(status_code, error_body))
    }

    /// JSONレスポンスをデコード
    ///
    /// 空のボディは `Value::Null` として扱う。
    fn parse_json(body: &str) -> ApiResult<Value> {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(body).map_err(ApiError::Decode)
    }
}
