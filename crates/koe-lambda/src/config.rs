//! AppConfig - 環境変数からの設定読み込み
//!
//! 初期化時に 1 回だけ読みます。必須の識別子（バケット名・テーブル名）が
//! 無ければ起動時にエラーにします（リクエスト処理中に気付くより早く）。

use std::time::Duration;

use koe_core::domain::link::DEFAULT_LINK_TTL;

const DEFAULT_VOICE_ID: &str = "Joanna";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid LINK_TTL_SECS: {0}")]
    InvalidTtl(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bucket: String,
    pub table: String,
    pub voice_id: String,
    pub link_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// lookup 関数から設定を組み立てる（テストで環境変数を触らないため）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bucket = required(&lookup, "BUCKET_NAME")?;
        let table = required(&lookup, "TABLE_NAME")?;
        let voice_id = lookup("VOICE_ID")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VOICE_ID.to_string());
        let link_ttl = match lookup("LINK_TTL_SECS") {
            None => DEFAULT_LINK_TTL,
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTtl(raw))?,
        };

        Ok(Self {
            bucket,
            table,
            voice_id,
            link_ttl,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}
