//! InMemoryMediaStore - 開発用の Blob ストア
//!
//! MediaStore と LinkIssuer の両方を実装します
//! （本番の S3 アダプタと同じ組み合わせ）。
//! presign はオブジェクトの有無を確認しません。本物の署名付き URL も
//! 発行時には存在確認をしないためです。

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::key::StorageKey;
use crate::domain::link::AccessLink;
use crate::ports::{LinkError, LinkIssuer, MediaStore, MediaStoreError};

/// 保存されたオブジェクト
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub bytes: Bytes,
    pub content_type: String,
}

/// InMemoryMediaStore は HashMap ベースの Blob ストア
#[derive(Default)]
pub struct InMemoryMediaStore {
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// キーのオブジェクトを取得（テスト用の観測口）
    pub fn object(&self, key: &StorageKey) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key.as_str()).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn put(
        &self,
        key: &StorageKey,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), MediaStoreError> {
        let mut objects = self
            .objects
            .lock()
            .map_err(|e| MediaStoreError::Service(format!("lock poisoned: {e}")))?;
        objects.insert(
            key.as_str().to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}

#[async_trait]
impl LinkIssuer for InMemoryMediaStore {
    async fn presign_get(&self, key: &StorageKey, ttl: Duration) -> Result<AccessLink, LinkError> {
        let url = format!("memory://{key}?expires={}", ttl.as_secs());
        Ok(AccessLink::new(url, ttl))
    }
}
