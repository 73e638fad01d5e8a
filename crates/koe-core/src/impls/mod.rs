//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports の実装を含めます。
//!
//! # 含まれる実装
//! - **FixedSynthesizer**: 固定応答の合成器（呼び出し回数を数える）
//! - **InMemoryMediaStore**: 開発用の Blob ストア（MediaStore + LinkIssuer）
//! - **InMemoryUsageStore**: 開発用の履歴テーブル
//!
//! # 本番用実装
//! 本番用の実装は `koe-aws` クレートに配置します
//! （PollySynthesizer, S3MediaStore, DynamoUsageStore）。

pub mod fixed_synth;
pub mod inmem_media;
pub mod inmem_usage;

// 主要な型を再エクスポート
pub use self::fixed_synth::FixedSynthesizer;
pub use self::inmem_media::{InMemoryMediaStore, StoredObject};
pub use self::inmem_usage::InMemoryUsageStore;
