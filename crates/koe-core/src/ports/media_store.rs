//! MediaStore port - Blob ストレージ（S3 など）
//!
//! アップロードが成功した時点で、永続化されたバイト列の所有者は
//! ストア側になります（このシステムは保持しない）。

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::domain::errors::ConvertError;
use crate::domain::key::StorageKey;

/// 音声オブジェクトの Content-Type（固定）
pub const AUDIO_MPEG: &str = "audio/mpeg";

#[derive(Debug, Error)]
pub enum MediaStoreError {
    #[error("media store failed: {0}")]
    Service(String),
}

impl From<MediaStoreError> for ConvertError {
    fn from(err: MediaStoreError) -> Self {
        ConvertError::Storage(err.to_string())
    }
}

/// MediaStore は音声オブジェクトを保存する
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn put(
        &self,
        key: &StorageKey,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), MediaStoreError>;
}
