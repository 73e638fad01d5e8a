//! SynthesisRequest - 検証済みの変換リクエスト
//!
//! 入力の検証はここで行います（trim して空なら拒否）。
//! requester の解決（claims → "anonymous" デフォルト）は
//! app/request.rs のエンベロープ側の責務です。

use super::errors::ConvertError;

/// requester が特定できないときの番兵値
///
/// 認証は上流ゲートウェイに委譲しているため、claims が無いことは
/// エラーではありません（意図した寛容なデフォルト）。
pub const ANONYMOUS: &str = "anonymous";

/// SynthesisRequest は検証を通過した変換リクエスト
///
/// 不変条件: `text` は trim 済みで空ではない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    text: String,
    requester_id: String,
}

impl SynthesisRequest {
    /// 生のテキストと requester から検証付きで作成
    ///
    /// trim 後に空であれば `ConvertError::TextRequired` を返します。
    pub fn new(raw_text: &str, requester_id: impl Into<String>) -> Result<Self, ConvertError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(ConvertError::TextRequired);
        }
        Ok(Self {
            text: text.to_string(),
            requester_id: requester_id.into(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn requester_id(&self) -> &str {
        &self.requester_id
    }

    /// 応答ボディ用にテキストを取り出す（flow の最後で move する）
    pub fn into_text(self) -> String {
        self.text
    }
}
