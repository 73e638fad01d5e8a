//! S3MediaStore - Amazon S3 への保存と署名付き GET
//!
//! MediaStore と LinkIssuer の両方を実装します。
//! バケット名は構築時に 1 回だけ渡されます（環境変数の読み取りは
//! koe-lambda の設定層の責務）。

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::time::Duration;
use tracing::debug;

use koe_core::domain::{AccessLink, StorageKey};
use koe_core::ports::{LinkError, LinkIssuer, MediaStore, MediaStoreError};

pub struct S3MediaStore {
    client: Client,
    bucket: String,
}

impl S3MediaStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl MediaStore for S3MediaStore {
    async fn put(
        &self,
        key: &StorageKey,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), MediaStoreError> {
        debug!(bucket = %self.bucket, key = %key, bytes = bytes.len(), "uploading audio");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| MediaStoreError::Service(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl LinkIssuer for S3MediaStore {
    async fn presign_get(&self, key: &StorageKey, ttl: Duration) -> Result<AccessLink, LinkError> {
        let presigning_config = PresigningConfig::builder()
            .expires_in(ttl)
            .build()
            .map_err(|e| LinkError::Service(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .presigned(presigning_config)
            .await
            .map_err(|e| LinkError::Service(e.to_string()))?;

        Ok(AccessLink::new(presigned.uri().to_string(), ttl))
    }
}
