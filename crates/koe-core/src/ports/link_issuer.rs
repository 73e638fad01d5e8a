//! LinkIssuer port - 署名付き URL の発行
//!
//! 本番では MediaStore と同じ S3 クライアントが両方を実装しますが、
//! 「保存」と「リンク発行」は別の関心事なのでポートは分けています。

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::errors::ConvertError;
use crate::domain::key::StorageKey;
use crate::domain::link::AccessLink;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("link issuing failed: {0}")]
    Service(String),
}

impl From<LinkError> for ConvertError {
    fn from(err: LinkError) -> Self {
        ConvertError::Link(err.to_string())
    }
}

/// LinkIssuer は保存済みオブジェクトへの期限付きリンクを発行する
///
/// リンクは保存されず、要求のたびに発行されます。
#[async_trait]
pub trait LinkIssuer: Send + Sync {
    async fn presign_get(&self, key: &StorageKey, ttl: Duration) -> Result<AccessLink, LinkError>;
}
