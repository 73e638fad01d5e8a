//! SpeechSynthesizer port - 音声合成サービス（Polly など）
//!
//! 「ペイロードが無い」は失敗とは別の終端状態なので、
//! `Ok(None)` で表現します（リトライ対象ではない）。

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::domain::errors::ConvertError;

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("synthesis service failed: {0}")]
    Service(String),
}

impl From<SynthesisError> for ConvertError {
    fn from(err: SynthesisError) -> Self {
        ConvertError::Synthesis(err.to_string())
    }
}

/// SpeechSynthesizer はテキストを音声（MP3 バイト列）に変換
///
/// 声のプロファイルと出力フォーマットは実装側の固定設定です。
/// 呼び出しごとに指定するものではありません（フォーマット交渉は非対応）。
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// テキストを合成する
    ///
    /// - `Ok(Some(bytes))`: 合成された音声
    /// - `Ok(None)`: サービスは応答したが音声ペイロードが無い
    /// - `Err(_)`: 呼び出し自体の失敗
    async fn synthesize(&self, text: &str) -> Result<Option<Bytes>, SynthesisError>;
}
