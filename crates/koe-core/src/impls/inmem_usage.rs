//! InMemoryUsageStore - 開発用の履歴テーブル
//!
//! 追記専用。UsageRecord をそのまま Vec に積みます。

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::record::UsageRecord;
use crate::ports::{UsageStore, UsageStoreError};

/// InMemoryUsageStore は Vec ベースの追記専用ストア
#[derive(Default)]
pub struct InMemoryUsageStore {
    records: Mutex<Vec<UsageRecord>>,
}

impl InMemoryUsageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// これまでのレコード（テスト用の観測口）
    pub fn records(&self) -> Vec<UsageRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl UsageStore for InMemoryUsageStore {
    async fn put_record(&self, record: UsageRecord) -> Result<(), UsageStoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| UsageStoreError::Service(format!("lock poisoned: {e}")))?;
        records.push(record);
        Ok(())
    }
}
