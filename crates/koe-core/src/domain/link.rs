//! AccessLink - 期限付きダウンロードリンク
//!
//! 永続化されません。必要になるたびに LinkIssuer が発行します。

use std::time::Duration;

/// 既定の有効期限（3600 秒）
pub const DEFAULT_LINK_TTL: Duration = Duration::from_secs(3600);

/// AccessLink は期限付きの取得用 URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLink {
    pub url: String,
    pub expires_in: Duration,
}

impl AccessLink {
    pub fn new(url: impl Into<String>, expires_in: Duration) -> Self {
        Self {
            url: url.into(),
            expires_in,
        }
    }
}
