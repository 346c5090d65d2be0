/// 認証情報
///
/// Bunny Stream は Stream Library ごとの API Key を
/// `AccessKey` ヘッダーでそのまま送る方式。
use std::fmt;

/// 認証ヘッダー名
pub const ACCESS_KEY_HEADER: &str = "AccessKey";

/// Stream Library の API Key
///
/// Debug 出力ではマスクされる。
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// ヘッダー値として送る文字列
    pub fn header_value(&self) -> &str {
        &self.0
    }

    /// AccessKey をマスキングして表示
    pub fn masked(&self) -> String {
        let key = &self.0;
        let len = key.chars().count();
        if len <= 8 {
            "*".repeat(len)
        } else {
            let head: String = key.chars().take(4).collect();
            let tail: String = key.chars().skip(len - 4).collect();
            format!("{}***{}", head, tail)
        }
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessKey").field(&self.masked()).finish()
    }
}
