//! StorageKey - Blob ストレージ上のオブジェクトキー
//!
//! キー契約: `{requester_id}/{artifact_id}.mp3`
//! ランダムな ArtifactId により、同一 requester の連続リクエストでも
//! キーが衝突しないことを保証します。

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ArtifactId;

/// StorageKey は Blob ストレージ上の音声オブジェクトを指す
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    /// requester と ArtifactId からキーを組み立てる
    pub fn for_artifact(requester_id: &str, artifact_id: ArtifactId) -> Self {
        Self(format!("{requester_id}/{artifact_id}.mp3"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
