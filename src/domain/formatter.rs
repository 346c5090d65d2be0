/// ドメインサービス: 表示用フォーマット
///
/// 動画レコードの日時（`dateUploaded`）や長さ（`length` 秒）を
/// ユーザー設定のタイムゾーンオフセットに従って人間向けの文字列に変換する。
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// API が返す日時文字列をフォーマット
///
/// # 引数
/// * `date_str` - ISO 8601 形式の日時（タイムゾーン表記なしの場合は UTC とみなす）
/// * `offset_seconds` - 表示用タイムゾーンオフセット（秒）
///
/// # 戻り値
/// - オフセット 0: "2024-12-01 14:30:45 UTC"
/// - それ以外: "2024-12-01 23:30:45 +09:00"
///
/// パースできない場合は元の文字列をそのまま返す。
pub fn format_upload_date(date_str: &str, offset_seconds: i32) -> String {
    let Some(datetime_utc) = parse_api_datetime(date_str) else {
        return date_str.to_string();
    };

    if offset_seconds == 0 {
        return datetime_utc.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    }

    match FixedOffset::east_opt(offset_seconds) {
        Some(offset) => datetime_utc
            .with_timezone(&offset)
            .format("%Y-%m-%d %H:%M:%S %:z")
            .to_string(),
        None => datetime_utc.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    }
}

/// 動画の長さ（秒）を "m:ss" / "h:mm:ss" にフォーマット
pub fn format_length(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

fn parse_api_datetime(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_upload_date_utc() {
        let result = format_upload_date("2025-11-29T16:49:10.123", 0);
        assert_eq!(result, "2025-11-29 16:49:10 UTC");
    }

    #[test]
    fn test_format_upload_date_with_offset() {
        // UTC 16:49:10 → UTC+9 01:49:10（翌日）
        let result = format_upload_date("2025-11-29T16:49:10", 32400);
        assert_eq!(result, "2025-11-30 01:49:10 +09:00");
    }

    #[test]
    fn test_format_upload_date_rfc3339() {
        let result = format_upload_date("2025-11-29T16:49:10Z", -28800);
        assert_eq!(result, "2025-11-29 08:49:10 -08:00");
    }

    #[test]
    fn test_format_upload_date_invalid() {
        assert_eq!(format_upload_date("yesterday", 0), "yesterday");
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(0), "0:00");
        assert_eq!(format_length(75), "1:15");
        assert_eq!(format_length(3725), "1:02:05");
    }
}
