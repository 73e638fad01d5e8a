//! Domain identifiers (strongly-typed IDs).
//!
//! # なぜ UUID v4 なのか？
//! - ストレージキーの一意性はランダム部分だけで保証する（調整不要）
//! - 時刻ソートは不要（記録の並びは UsageRecord の timestamp が持つ）
//! - `{requester_id}/{uuid}.mp3` というキー契約にそのまま埋め込める

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// ArtifactId は生成された音声ひとつを識別する
///
/// Display は素の UUID を出力します（プレフィックスなし）。
/// ストレージキーの一部としてそのまま使われるためです。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactId(Uuid);

impl ArtifactId {
    /// ランダムな ArtifactId を作成
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// UUID から ArtifactId を作成
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 内部の UUID を取得
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ArtifactId {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
