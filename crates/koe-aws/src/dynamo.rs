//! DynamoUsageStore - DynamoDB への履歴追記
//!
//! アイテムの形は固定: user_id / timestamp / audio_key / text。
//! テーブルの物理キーは (user_id, timestamp)。timestamp は
//! マイクロ秒精度の ISO-8601 文字列なので実用上は衝突しません。

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use koe_core::domain::UsageRecord;
use koe_core::ports::{UsageStore, UsageStoreError};

pub struct DynamoUsageStore {
    client: Client,
    table: String,
}

impl DynamoUsageStore {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl UsageStore for DynamoUsageStore {
    async fn put_record(&self, record: UsageRecord) -> Result<(), UsageStoreError> {
        debug!(table = %self.table, requester_id = %record.requester_id, "writing usage record");

        self.client
            .put_item()
            .table_name(&self.table)
            .item("user_id", AttributeValue::S(record.requester_id.clone()))
            .item("timestamp", AttributeValue::S(record.iso_timestamp()))
            .item(
                "audio_key",
                AttributeValue::S(record.storage_key.as_str().to_string()),
            )
            .item("text", AttributeValue::S(record.text))
            .send()
            .await
            .map_err(|e| UsageStoreError::Service(e.to_string()))?;

        Ok(())
    }
}
