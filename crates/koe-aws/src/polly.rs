//! PollySynthesizer - Amazon Polly による音声合成

use async_trait::async_trait;
use aws_sdk_polly::types::{OutputFormat, VoiceId};
use aws_sdk_polly::Client;
use bytes::Bytes;
use tracing::debug;

use koe_core::ports::{SpeechSynthesizer, SynthesisError};

/// PollySynthesizer は Polly の synthesize_speech を呼ぶ
///
/// 声のプロファイルは構築時に固定されます（既定は Joanna、標準エンジン）。
/// 出力は常に MP3 です。
pub struct PollySynthesizer {
    client: Client,
    voice_id: VoiceId,
}

impl PollySynthesizer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            voice_id: VoiceId::Joanna,
        }
    }

    pub fn with_voice(client: Client, voice_id: VoiceId) -> Self {
        Self { client, voice_id }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Option<Bytes>, SynthesisError> {
        debug!(chars = text.len(), voice = self.voice_id.as_str(), "calling polly");

        let response = self
            .client
            .synthesize_speech()
            .text(text)
            .voice_id(self.voice_id.clone())
            .output_format(OutputFormat::Mp3)
            .send()
            .await
            .map_err(|e| SynthesisError::Service(e.to_string()))?;

        let audio = response
            .audio_stream
            .collect()
            .await
            .map_err(|e| SynthesisError::Service(e.to_string()))?
            .into_bytes();

        // 空のストリームは「ペイロード無し」として扱う
        if audio.is_empty() {
            return Ok(None);
        }
        Ok(Some(audio))
    }
}
