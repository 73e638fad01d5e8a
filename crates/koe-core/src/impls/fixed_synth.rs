//! FixedSynthesizer - 固定応答の合成器（開発用・テスト用）
//!
//! 「合成した音声」「ペイロード無し」「呼び出し失敗」の 3 つの
//! 応答を固定で返し、呼び出し回数を数えます。
//! 「検証エラー時はコラボレータが一切呼ばれない」ことの検証に使います。

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::ports::{SpeechSynthesizer, SynthesisError};

enum Script {
    Audio(Bytes),
    Empty,
    Fail(String),
}

/// FixedSynthesizer は SpeechSynthesizer の固定応答実装
pub struct FixedSynthesizer {
    script: Script,
    calls: AtomicU32,
}

impl FixedSynthesizer {
    /// 常に同じ音声バイト列を返す
    pub fn with_audio(bytes: Bytes) -> Self {
        Self {
            script: Script::Audio(bytes),
            calls: AtomicU32::new(0),
        }
    }

    /// 常に「ペイロード無し」を返す
    pub fn empty() -> Self {
        Self {
            script: Script::Empty,
            calls: AtomicU32::new(0),
        }
    }

    /// 常に失敗する
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(message.into()),
            calls: AtomicU32::new(0),
        }
    }

    /// これまでの呼び出し回数
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SpeechSynthesizer for FixedSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<Option<Bytes>, SynthesisError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.script {
            Script::Audio(bytes) => Ok(Some(bytes.clone())),
            Script::Empty => Ok(None),
            Script::Fail(message) => Err(SynthesisError::Service(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_every_invocation() {
        let synth = FixedSynthesizer::with_audio(Bytes::from_static(b"abc"));
        assert_eq!(synth.calls(), 0);

        let out = synth.synthesize("hello").await.unwrap();
        assert_eq!(out, Some(Bytes::from_static(b"abc")));
        let _ = synth.synthesize("again").await.unwrap();
        assert_eq!(synth.calls(), 2);
    }

    #[tokio::test]
    async fn empty_and_failing_scripts() {
        let empty = FixedSynthesizer::empty();
        assert_eq!(empty.synthesize("x").await.unwrap(), None);

        let failing = FixedSynthesizer::failing("down");
        let err = failing.synthesize("x").await.unwrap_err();
        assert!(err.to_string().contains("down"));
    }
}
