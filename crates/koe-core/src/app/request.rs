//! ConvertEvent - 入力エンベロープ
//!
//! トランスポート（Lambda/HTTP）から渡される生の入力です。
//! body は JSON 文字列、claims は上流ゲートウェイが注入した
//! JWT クレームのマップ（無いこともある）。

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::errors::ConvertError;
use crate::domain::request::{SynthesisRequest, ANONYMOUS};

/// IdentityClaims は上流で検証済みの ID クレーム
///
/// どの階層（requestContext / authorizer / jwt / claims / sub）が
/// 欠けていても `requester_id()` は "anonymous" に落ちます。
/// エラーにはなりません。
#[derive(Debug, Clone, Default)]
pub struct IdentityClaims(Option<HashMap<String, String>>);

impl IdentityClaims {
    pub fn new(claims: HashMap<String, String>) -> Self {
        Self(Some(claims))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    /// `sub` クレーム（あれば）
    pub fn subject(&self) -> Option<&str> {
        self.0
            .as_ref()
            .and_then(|claims| claims.get("sub"))
            .map(String::as_str)
    }

    /// requester を解決する（無ければ "anonymous"）
    pub fn requester_id(&self) -> &str {
        self.subject().unwrap_or(ANONYMOUS)
    }
}

/// ConvertEvent はハンドラへの入力 1 件
#[derive(Debug, Clone, Default)]
pub struct ConvertEvent {
    pub body: Option<String>,
    pub claims: IdentityClaims,
}

impl ConvertEvent {
    pub fn new(body: impl Into<String>, claims: IdentityClaims) -> Self {
        Self {
            body: Some(body.into()),
            claims,
        }
    }

    /// body を検証して SynthesisRequest に変換
    ///
    /// - body が無い / `text` フィールドが無い / 空白のみ → `TextRequired`
    /// - body が JSON として壊れている → `BadBody`（HTTP 500 側）
    pub fn into_request(self) -> Result<SynthesisRequest, ConvertError> {
        let requester_id = self.claims.requester_id().to_string();
        let raw_text = match self.body.as_deref() {
            None => String::new(),
            Some(body) => {
                let payload: BodyPayload = serde_json::from_str(body)
                    .map_err(|e| ConvertError::BadBody(e.to_string()))?;
                payload.text
            }
        };
        SynthesisRequest::new(&raw_text, requester_id)
    }
}

#[derive(Debug, Deserialize)]
struct BodyPayload {
    #[serde(default)]
    text: String,
}
