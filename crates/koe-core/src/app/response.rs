//! ApiResponse - 出力エンベロープと境界写像
//!
//! 内部では ConvertError が失敗箇所を分類していますが、
//! 外部契約は「Validation だけ 400、それ以外はすべて 500 +
//! `{"error": <message>}`」です。写像はこのモジュールに集約します。

use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::errors::{ConvertError, ErrorKind};

/// すべての応答に付ける CORS ヘッダ値
pub const ALLOW_ANY_ORIGIN: &str = "*";

/// 成功応答のボディ
#[derive(Debug, Clone, Serialize)]
pub struct ConvertSuccess {
    pub message: &'static str,
    pub audio_url: String,
    pub timestamp: String,
    pub text: String,
}

impl ConvertSuccess {
    pub fn new(audio_url: String, timestamp: String, text: String) -> Self {
        Self {
            message: "success",
            audio_url,
            timestamp,
            text,
        }
    }
}

/// ApiResponse はトランスポート非依存の HTTP 風応答
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(success: &ConvertSuccess) -> Self {
        Self {
            status: 200,
            // ConvertSuccess は failable なフィールドを持たないので
            // serialize は失敗しない
            body: serde_json::to_value(success).unwrap_or_else(|_| json!({})),
        }
    }

    pub fn from_error(err: &ConvertError) -> Self {
        let status = match err.kind() {
            ErrorKind::Validation => 400,
            ErrorKind::EmptyResult | ErrorKind::Infrastructure => 500,
        };
        Self {
            status,
            body: json!({ "error": err.to_string() }),
        }
    }
}
