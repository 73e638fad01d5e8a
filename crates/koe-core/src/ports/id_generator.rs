//! ArtifactIdGenerator port - ID 生成の抽象化
//!
//! ストレージキーの一意性はこの ID のランダム性に依存します。
//! テスト容易性のために trait として抽象化しています。

use uuid::Uuid;

use crate::domain::ids::ArtifactId;

/// ArtifactIdGenerator は ArtifactId を生成
pub trait ArtifactIdGenerator: Send + Sync {
    fn generate(&self) -> ArtifactId;
}

/// UuidGenerator は UUID v4 ベースの生成器（本番用）
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl ArtifactIdGenerator for UuidGenerator {
    fn generate(&self) -> ArtifactId {
        ArtifactId::random()
    }
}

/// FixedIdGenerator は常に同じ ID を返す（テスト用）
#[derive(Debug, Clone, Copy)]
pub struct FixedIdGenerator(ArtifactId);

impl FixedIdGenerator {
    pub fn new(id: ArtifactId) -> Self {
        Self(id)
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(ArtifactId::from_uuid(uuid))
    }
}

impl ArtifactIdGenerator for FixedIdGenerator {
    fn generate(&self) -> ArtifactId {
        self.0
    }
}
