//! HandlerBuilder - コラボレータのワイヤリング
//!
//! # Fail-fast 設計
//! - 4 つの外部コラボレータは必須。`build()` 時に欠けているものを
//!   名指しでエラーにする（起動時に気付けるように）。
//! - Clock / ArtifactIdGenerator / TTL には本番既定値がある。

use std::sync::Arc;
use std::time::Duration;

use crate::domain::link::DEFAULT_LINK_TTL;
use crate::ports::{
    ArtifactIdGenerator, Clock, LinkIssuer, MediaStore, SpeechSynthesizer, SystemClock, UsageStore,
    UuidGenerator,
};

use super::handler::ConvertHandler;

/// BuildError はワイヤリング不備
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}

/// HandlerBuilder は ConvertHandler を構築
///
/// # 使用例
/// ```ignore
/// let handler = HandlerBuilder::new()
///     .synthesizer(synthesizer)
///     .media_store(s3.clone())
///     .link_issuer(s3)
///     .usage_store(table)
///     .build()?;
/// ```
#[derive(Default)]
pub struct HandlerBuilder {
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    media: Option<Arc<dyn MediaStore>>,
    links: Option<Arc<dyn LinkIssuer>>,
    usage: Option<Arc<dyn UsageStore>>,
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn ArtifactIdGenerator>>,
    link_ttl: Option<Duration>,
}

impl HandlerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn media_store(mut self, media: Arc<dyn MediaStore>) -> Self {
        self.media = Some(media);
        self
    }

    pub fn link_issuer(mut self, links: Arc<dyn LinkIssuer>) -> Self {
        self.links = Some(links);
        self
    }

    pub fn usage_store(mut self, usage: Arc<dyn UsageStore>) -> Self {
        self.usage = Some(usage);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn ArtifactIdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn link_ttl(mut self, ttl: Duration) -> Self {
        self.link_ttl = Some(ttl);
        self
    }

    pub fn build(self) -> Result<ConvertHandler, BuildError> {
        Ok(ConvertHandler {
            synthesizer: self
                .synthesizer
                .ok_or(BuildError::MissingCollaborator("synthesizer"))?,
            media: self
                .media
                .ok_or(BuildError::MissingCollaborator("media_store"))?,
            links: self
                .links
                .ok_or(BuildError::MissingCollaborator("link_issuer"))?,
            usage: self
                .usage
                .ok_or(BuildError::MissingCollaborator("usage_store"))?,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            ids: self.ids.unwrap_or_else(|| Arc::new(UuidGenerator)),
            link_ttl: self.link_ttl.unwrap_or(DEFAULT_LINK_TTL),
        })
    }
}
