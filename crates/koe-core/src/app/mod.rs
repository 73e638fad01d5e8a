//! App - アプリケーション層
//!
//! ports を組み合わせて変換フローを実装します。
//!
//! # 主要コンポーネント
//! - **ConvertHandler**: リクエスト 1 件の直列フロー（parse→synthesize→put→record→presign）
//! - **HandlerBuilder**: コラボレータのワイヤリングと起動時検証（Fail-fast）
//! - **ConvertEvent / IdentityClaims**: 入力エンベロープ
//! - **ApiResponse**: 出力エンベロープと エラー→HTTP の境界写像

pub mod builder;
pub mod handler;
pub mod request;
pub mod response;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, HandlerBuilder};
pub use self::handler::ConvertHandler;
pub use self::request::{ConvertEvent, IdentityClaims};
pub use self::response::{ApiResponse, ALLOW_ANY_ORIGIN};
