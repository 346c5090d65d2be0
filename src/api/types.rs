/// API通信用の型定義
///
/// リクエストボディとクエリパラメータ。
/// レスポンスは `serde_json::Value` のまま返すので、ここには持たない。
use crate::config::APP_CONFIG;
use serde::Serialize;
use std::collections::BTreeMap;

/// 空文字列は「指定なし」とみなす
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// POST /videos
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<&'a str>,
}

/// POST /videos/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest<'a> {
    pub title: &'a str,
    pub collection_id: &'a str,
}

/// POST /videos/{id}/thumbnail
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetThumbnailRequest<'a> {
    pub thumbnail_url: &'a str,
}

/// POST /videos/{id}/fetch
#[derive(Debug, Clone, Serialize)]
pub struct FetchVideoRequest<'a> {
    pub url: &'a str,
    /// 取得元へのリクエストに付けるHTTPヘッダー
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<&'a BTreeMap<String, String>>,
}

/// POST /videos/{id}/captions/{srclang}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCaptionsRequest<'a> {
    /// base64 エンコード済みの字幕ファイル
    pub captions_file: String,
    pub srclang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

/// GET /videos のクエリパラメータ
///
/// `page` / `per_page` / `sort_by` は常に送られ、
/// `search` / `collection` は指定時のみ送られる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListVideosParams {
    pub page: u32,
    pub per_page: u32,
    pub sort_by: String,
    pub search: Option<String>,
    pub collection: Option<String>,
}

impl Default for ListVideosParams {
    fn default() -> Self {
        Self {
            page: APP_CONFIG.list.default_page,
            per_page: APP_CONFIG.list.default_per_page,
            sort_by: APP_CONFIG.list.default_sort_by.to_string(),
            search: None,
            collection: None,
        }
    }
}

impl ListVideosParams {
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// クエリ文字列用のキー/値ペア（エンコードは HTTP クライアントが行う）
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("sort_by", self.sort_by.clone()),
        ];

        if let Some(search) = non_empty(self.search.as_deref()) {
            query.push(("search", search.to_string()));
        }
        if let Some(collection) = non_empty(self.collection.as_deref()) {
            query.push(("collection", collection.to_string()));
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_omits_missing_collection() {
        let body = CreateVideoRequest {
            title: "t",
            collection_id: None,
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"title": "t"}));

        let body = CreateVideoRequest {
            title: "t",
            collection_id: Some("c1"),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "t", "collectionId": "c1"})
        );
    }

    #[test]
    fn test_captions_request_field_names() {
        let body = AddCaptionsRequest {
            captions_file: "V0VCVlRU".to_string(),
            srclang: "en",
            label: Some("English"),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"captionsFile": "V0VCVlRU", "srclang": "en", "label": "English"})
        );
    }

    #[test]
    fn test_list_params_default_query() {
        let query = ListVideosParams::default().to_query();
        assert_eq!(
            query,
            vec![
                ("page", "1".to_string()),
                ("per_page", "10".to_string()),
                ("sort_by", "date".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_params_optional_fields() {
        let query = ListVideosParams::default()
            .page(3)
            .search("cats")
            .collection("")
            .to_query();

        assert!(query.contains(&("page", "3".to_string())));
        assert!(query.contains(&("search", "cats".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "collection"));
    }
}
