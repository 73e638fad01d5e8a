//! UsageRecord - 変換履歴の追記専用レコード
//!
//! 成功したリクエストごとに 1 件。更新・削除の経路はありません。
//! 物理キーは (requester_id, timestamp) で、timestamp のマイクロ秒
//! 精度とキーのランダム性により実用上は衝突しません。

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::key::StorageKey;

/// UsageRecord は 1 回の変換の記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub requester_id: String,
    pub timestamp: DateTime<Utc>,
    pub storage_key: StorageKey,
    pub text: String,
}

impl UsageRecord {
    pub fn new(
        requester_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        storage_key: StorageKey,
        text: impl Into<String>,
    ) -> Self {
        Self {
            requester_id: requester_id.into(),
            timestamp,
            storage_key,
            text: text.into(),
        }
    }

    /// ISO-8601 UTC（マイクロ秒精度、`Z` 付き）
    ///
    /// 応答ボディとテーブルのソートキーの両方でこの表現を使い、
    /// 「応答の timestamp == レコードの timestamp」を保ちます。
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}
