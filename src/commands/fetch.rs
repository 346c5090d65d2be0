use crate::commands::result::{ActionKind, ActionResult, CommandResult};
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;

/// 外部 URL から動画を取り込ませる
///
/// # 引数
/// * `headers` - "Name: value" 形式のヘッダー指定
pub async fn execute(video_id: &str, source_url: &str, headers: &[String]) -> Result<CommandResult> {
    let headers = parse_headers(headers)?;
    let client = super::connect()?;

    let response = client
        .fetch_video(video_id, source_url, Some(&headers))
        .await
        .with_context(|| format!("Failed to fetch {} into video {}", source_url, video_id))?;

    Ok(CommandResult::Action(ActionResult {
        action: ActionKind::Fetch,
        video_id: video_id.to_string(),
        response,
    }))
}

/// "Name: value" のリストをマップに変換
fn parse_headers(raw: &[String]) -> Result<BTreeMap<String, String>> {
    let mut headers = BTreeMap::new();
    for entry in raw {
        let Some((name, value)) = entry.split_once(':') else {
            bail!("Invalid header '{}'. Expected format: 'Name: value'", entry);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Invalid header '{}'. Header name cannot be empty", entry);
        }
        headers.insert(name.to_string(), value.trim().to_string());
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers() {
        let headers = parse_headers(&[
            "Authorization: Bearer abc".to_string(),
            "X-Token:1:2".to_string(),
        ])
        .unwrap();
        assert_eq!(headers["Authorization"], "Bearer abc");
        assert_eq!(headers["X-Token"], "1:2");
    }

    #[test]
    fn test_parse_headers_rejects_missing_colon() {
        assert!(parse_headers(&["nocolon".to_string()]).is_err());
        assert!(parse_headers(&[": value".to_string()]).is_err());
    }
}
