//! UsageStore port - 変換履歴テーブル（DynamoDB など）
//!
//! 追記のみ。ストアの書き込みが失敗しても Blob の削除による
//! 補償は行いません（孤児 Blob は許容されたギャップ）。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::errors::ConvertError;
use crate::domain::record::UsageRecord;

#[derive(Debug, Error)]
pub enum UsageStoreError {
    #[error("usage store failed: {0}")]
    Service(String),
}

impl From<UsageStoreError> for ConvertError {
    fn from(err: UsageStoreError) -> Self {
        ConvertError::Record(err.to_string())
    }
}

/// UsageStore は UsageRecord を追記する
#[async_trait]
pub trait UsageStore: Send + Sync {
    async fn put_record(&self, record: UsageRecord) -> Result<(), UsageStoreError>;
}
