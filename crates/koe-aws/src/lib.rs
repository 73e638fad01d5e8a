//! koe-aws
//!
//! koe-core の ports に対する本番用 AWS アダプタ。
//!
//! - **PollySynthesizer**: SpeechSynthesizer（Amazon Polly, MP3 固定）
//! - **S3MediaStore**: MediaStore + LinkIssuer（put_object と署名付き GET）
//! - **DynamoUsageStore**: UsageStore（put_item、物理キーは user_id + timestamp）
//!
//! SDK のエラーはすべてメッセージ文字列としてポートのエラー型に
//! 写像します。リトライはここでも行いません（SDK 既定に任せる）。

pub mod dynamo;
pub mod polly;
pub mod s3;

pub use self::dynamo::DynamoUsageStore;
pub use self::polly::PollySynthesizer;
pub use self::s3::S3MediaStore;
