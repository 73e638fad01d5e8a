//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部マネージドサービス（音声合成、Blob ストレージ、
//! KV テーブル、署名付き URL 発行）へのインターフェースを提供し、
//! 実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - 4 つのコラボレータはすべて外部サービス（このシステムは実装しない）
//! - LinkIssuer は MediaStore と同一サービスのことが多いが、ポートとしては分離
//! - Clock / ArtifactIdGenerator により時刻と乱数をテストで差し替え可能

pub mod clock;
pub mod id_generator;
pub mod link_issuer;
pub mod media_store;
pub mod synthesizer;
pub mod usage_store;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{ArtifactIdGenerator, FixedIdGenerator, UuidGenerator};
pub use self::link_issuer::{LinkError, LinkIssuer};
pub use self::media_store::{MediaStore, MediaStoreError, AUDIO_MPEG};
pub use self::synthesizer::{SpeechSynthesizer, SynthesisError};
pub use self::usage_store::{UsageStore, UsageStoreError};
