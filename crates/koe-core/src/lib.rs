//! koe-core
//!
//! テキストを音声に変換するリクエストフローの中核ライブラリ。
//! トランスポート（Lambda/HTTP）やベンダー SDK には依存しません。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, key, request, record, link, errors）
//! - **ports**: 抽象化レイヤー（SpeechSynthesizer, MediaStore, LinkIssuer, UsageStore, Clock, ArtifactIdGenerator）
//! - **app**: アプリケーションロジック（ConvertHandler, HandlerBuilder, 入出力エンベロープ）
//! - **impls**: 開発用・テスト用の実装（InMemoryMediaStore など）
//!
//! # 本番用実装
//! 本番用の実装は別クレートに配置します：
//! - `koe-aws`: PollySynthesizer, S3MediaStore, DynamoUsageStore
//! - `koe-lambda`: Lambda エントリポイント（設定・ワイヤリング）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
