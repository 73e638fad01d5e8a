//! ConvertHandler - 変換フロー本体
//!
//! 1 リクエストを最初から最後まで直列・同期的に処理します。
//! リトライ無し、並行サブタスク無し、部分ロールバック無し。
//!
//! フロー:
//! 1. body を検証して SynthesisRequest を得る（失敗 → 400）
//! 2. 音声合成（ペイロード無し → EmptySynthesis）
//! 3. `{requester_id}/{uuid}.mp3` で Blob にアップロード
//! 4. 書き込み時刻で UsageRecord を追記
//! 5. 期限付きリンクを発行して 200 を返す

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::errors::ConvertError;
use crate::domain::key::StorageKey;
use crate::domain::record::UsageRecord;
use crate::ports::{
    ArtifactIdGenerator, Clock, LinkIssuer, MediaStore, SpeechSynthesizer, UsageStore, AUDIO_MPEG,
};

use super::request::ConvertEvent;
use super::response::{ApiResponse, ConvertSuccess};

/// ConvertHandler は 1 リクエストの変換フローを実行する
///
/// コラボレータはすべて注入されます（ambient なグローバルは持たない）。
/// 呼び出し間で共有する可変状態はありません。
pub struct ConvertHandler {
    pub(super) synthesizer: Arc<dyn SpeechSynthesizer>,
    pub(super) media: Arc<dyn MediaStore>,
    pub(super) links: Arc<dyn LinkIssuer>,
    pub(super) usage: Arc<dyn UsageStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn ArtifactIdGenerator>,
    pub(super) link_ttl: Duration,
}

impl ConvertHandler {
    /// リクエストを処理して HTTP 風応答を返す
    ///
    /// 内部エラーはここで ApiResponse に写像されます。
    /// この関数自体は失敗しません。
    pub async fn handle(&self, event: ConvertEvent) -> ApiResponse {
        match self.run(event).await {
            Ok(success) => ApiResponse::ok(&success),
            Err(err) => {
                warn!(kind = ?err.kind(), error = %err, "conversion failed");
                ApiResponse::from_error(&err)
            }
        }
    }

    async fn run(&self, event: ConvertEvent) -> Result<ConvertSuccess, ConvertError> {
        let request = event.into_request()?;

        let audio = self
            .synthesizer
            .synthesize(request.text())
            .await?
            .ok_or(ConvertError::EmptySynthesis)?;

        let key = StorageKey::for_artifact(request.requester_id(), self.ids.generate());
        let audio_len = audio.len();
        self.media.put(&key, audio, AUDIO_MPEG).await?;

        // timestamp は「レコードを書く瞬間」に取得する契約
        let record = UsageRecord::new(
            request.requester_id(),
            self.clock.now(),
            key.clone(),
            request.text(),
        );
        let timestamp = record.iso_timestamp();
        if let Err(err) = self.usage.put_record(record).await {
            // 補償削除はしない。掃除用にキーを残しておく。
            warn!(key = %key, error = %err, "usage record failed after upload, blob is orphaned");
            return Err(err.into());
        }

        let link = self.links.presign_get(&key, self.link_ttl).await?;

        info!(
            requester_id = request.requester_id(),
            key = %key,
            audio_bytes = audio_len,
            "conversion succeeded"
        );

        Ok(ConvertSuccess::new(link.url, timestamp, request.into_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::builder::HandlerBuilder;
    use crate::app::request::IdentityClaims;
    use crate::domain::ids::ArtifactId;
    use crate::impls::{FixedSynthesizer, InMemoryMediaStore, InMemoryUsageStore};
    use crate::ports::{FixedClock, FixedIdGenerator, UsageStoreError};
    use async_trait::async_trait;
    use bytes::Bytes;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    struct FailingUsageStore;

    #[async_trait]
    impl UsageStore for FailingUsageStore {
        async fn put_record(&self, _record: UsageRecord) -> Result<(), UsageStoreError> {
            Err(UsageStoreError::Service("table unavailable".into()))
        }
    }

    struct FailingLinkIssuer;

    #[async_trait]
    impl LinkIssuer for FailingLinkIssuer {
        async fn presign_get(
            &self,
            _key: &StorageKey,
            _ttl: Duration,
        ) -> Result<crate::domain::link::AccessLink, crate::ports::LinkError> {
            Err(crate::ports::LinkError::Service("signing failed".into()))
        }
    }

    struct Rig {
        synthesizer: Arc<FixedSynthesizer>,
        media: Arc<InMemoryMediaStore>,
        usage: Arc<InMemoryUsageStore>,
        handler: ConvertHandler,
    }

    fn rig(synthesizer: FixedSynthesizer) -> Rig {
        let synthesizer = Arc::new(synthesizer);
        let media = Arc::new(InMemoryMediaStore::new());
        let usage = Arc::new(InMemoryUsageStore::new());
        let handler = HandlerBuilder::new()
            .synthesizer(synthesizer.clone())
            .media_store(media.clone())
            .link_issuer(media.clone())
            .usage_store(usage.clone())
            .clock(Arc::new(FixedClock::new(
                Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            )))
            .id_generator(Arc::new(FixedIdGenerator::new(ArtifactId::random())))
            .build()
            .unwrap();
        Rig {
            synthesizer,
            media,
            usage,
            handler,
        }
    }

    fn event_with_sub(body: &str, sub: &str) -> ConvertEvent {
        let claims = IdentityClaims::new(HashMap::from([("sub".to_string(), sub.to_string())]));
        ConvertEvent::new(body, claims)
    }

    #[tokio::test]
    async fn successful_call_returns_200_with_link_and_timestamp() {
        let rig = rig(FixedSynthesizer::with_audio(Bytes::from_static(b"mp3!")));

        let response = rig
            .handler
            .handle(event_with_sub(r#"{"text": " Hello world "}"#, "user-42"))
            .await;

        assert_eq!(response.status, 200);
        assert_eq!(response.body["message"], "success");
        assert_eq!(response.body["text"], "Hello world");
        assert_eq!(response.body["timestamp"], "2024-01-02T03:04:05.000000Z");

        // Blob が audio/mpeg で保存されている
        let records = rig.usage.records();
        assert_eq!(records.len(), 1);
        let key = &records[0].storage_key;
        assert!(key.as_str().starts_with("user-42/"));
        assert!(key.as_str().ends_with(".mp3"));
        let stored = rig.media.object(key).unwrap();
        assert_eq!(stored.content_type, "audio/mpeg");
        assert_eq!(stored.bytes, Bytes::from_static(b"mp3!"));

        // 応答の URL はキーを指し、timestamp はレコードと一致する
        let url = response.body["audio_url"].as_str().unwrap();
        assert!(url.contains(key.as_str()));
        assert_eq!(records[0].iso_timestamp(), "2024-01-02T03:04:05.000000Z");
        assert_eq!(records[0].text, "Hello world");
    }

    #[tokio::test]
    async fn blank_text_returns_400_and_calls_no_collaborator() {
        let rig = rig(FixedSynthesizer::with_audio(Bytes::from_static(b"mp3!")));

        let response = rig
            .handler
            .handle(ConvertEvent::new(r#"{"text": "   "}"#, IdentityClaims::absent()))
            .await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body, serde_json::json!({ "error": "text is required" }));
        assert_eq!(rig.synthesizer.calls(), 0);
        assert!(rig.media.is_empty());
        assert!(rig.usage.records().is_empty());
    }

    #[tokio::test]
    async fn empty_synthesis_returns_500_and_stores_are_untouched() {
        let rig = rig(FixedSynthesizer::empty());

        let response = rig
            .handler
            .handle(ConvertEvent::new(r#"{"text": "hi"}"#, IdentityClaims::absent()))
            .await;

        assert_eq!(response.status, 500);
        assert_eq!(
            response.body,
            serde_json::json!({ "error": "speech synthesis returned no audio" })
        );
        assert_eq!(rig.synthesizer.calls(), 1);
        assert!(rig.media.is_empty());
        assert!(rig.usage.records().is_empty());
    }

    #[tokio::test]
    async fn synthesis_failure_maps_to_500() {
        let rig = rig(FixedSynthesizer::failing("polly down"));

        let response = rig
            .handler
            .handle(ConvertEvent::new(r#"{"text": "hi"}"#, IdentityClaims::absent()))
            .await;

        assert_eq!(response.status, 500);
        let message = response.body["error"].as_str().unwrap();
        assert!(message.contains("polly down"));
        assert!(rig.media.is_empty());
    }

    #[tokio::test]
    async fn missing_claims_default_to_anonymous() {
        let rig = rig(FixedSynthesizer::with_audio(Bytes::from_static(b"mp3!")));

        let response = rig
            .handler
            .handle(ConvertEvent::new(
                r#"{"text": "Hello world"}"#,
                IdentityClaims::absent(),
            ))
            .await;

        assert_eq!(response.status, 200);
        let records = rig.usage.records();
        assert_eq!(records[0].requester_id, "anonymous");
        assert!(records[0].storage_key.as_str().starts_with("anonymous/"));
        assert!(records[0].storage_key.as_str().ends_with(".mp3"));
    }

    #[tokio::test]
    async fn storage_keys_are_unique_across_identical_requests() {
        // 既定の UuidGenerator を使う（FixedIdGenerator では一意性を測れない）
        let synthesizer = Arc::new(FixedSynthesizer::with_audio(Bytes::from_static(b"mp3!")));
        let media = Arc::new(InMemoryMediaStore::new());
        let usage = Arc::new(InMemoryUsageStore::new());
        let handler = HandlerBuilder::new()
            .synthesizer(synthesizer)
            .media_store(media.clone())
            .link_issuer(media.clone())
            .usage_store(usage.clone())
            .build()
            .unwrap();

        for _ in 0..3 {
            let response = handler
                .handle(ConvertEvent::new(r#"{"text": "same"}"#, IdentityClaims::absent()))
                .await;
            assert_eq!(response.status, 200);
        }

        let keys: std::collections::HashSet<_> = usage
            .records()
            .into_iter()
            .map(|r| r.storage_key)
            .collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(media.len(), 3);
    }

    #[tokio::test]
    async fn record_failure_leaves_the_uploaded_blob() {
        let synthesizer = Arc::new(FixedSynthesizer::with_audio(Bytes::from_static(b"mp3!")));
        let media = Arc::new(InMemoryMediaStore::new());
        let handler = HandlerBuilder::new()
            .synthesizer(synthesizer)
            .media_store(media.clone())
            .link_issuer(media.clone())
            .usage_store(Arc::new(FailingUsageStore))
            .build()
            .unwrap();

        let response = handler
            .handle(ConvertEvent::new(r#"{"text": "hi"}"#, IdentityClaims::absent()))
            .await;

        assert_eq!(response.status, 500);
        let message = response.body["error"].as_str().unwrap();
        assert!(message.contains("table unavailable"));
        // 補償削除はしないので Blob は残る（許容されたギャップ）
        assert_eq!(media.len(), 1);
    }

    #[tokio::test]
    async fn link_failure_maps_to_500_after_both_writes() {
        let synthesizer = Arc::new(FixedSynthesizer::with_audio(Bytes::from_static(b"mp3!")));
        let media = Arc::new(InMemoryMediaStore::new());
        let usage = Arc::new(InMemoryUsageStore::new());
        let handler = HandlerBuilder::new()
            .synthesizer(synthesizer)
            .media_store(media.clone())
            .link_issuer(Arc::new(FailingLinkIssuer))
            .usage_store(usage.clone())
            .build()
            .unwrap();

        let response = handler
            .handle(ConvertEvent::new(r#"{"text": "hi"}"#, IdentityClaims::absent()))
            .await;

        assert_eq!(response.status, 500);
        // 両方の書き込みは済んでいる
        assert_eq!(media.len(), 1);
        assert_eq!(usage.records().len(), 1);
    }
}
