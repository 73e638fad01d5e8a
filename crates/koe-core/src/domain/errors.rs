//! Errors - エラー型と分類
//!
//! 外部契約は「400 か 500 か」の二値ですが、内部では失敗箇所を
//! 保持して分類します（ログ・テストで区別できるように）。
//! 境界での HTTP への写像は app/response.rs にあります。

use thiserror::Error;

/// ErrorKind は変換フローのエラー分類
///
/// # 分類
/// - Validation: 入力不備（利用者が修正できる、HTTP 400）
/// - EmptyResult: 合成サービスが音声を返さなかった（HTTP 500）
/// - Infrastructure: コラボレータ呼び出しの失敗（HTTP 500）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    EmptyResult,
    Infrastructure,
}

/// ConvertError は変換フローのドメインエラー
///
/// Display 文字列がそのまま応答ボディの `error` フィールドになるため、
/// メッセージは契約の一部です（`text is required` など）。
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("text is required")]
    TextRequired,

    #[error("invalid request body: {0}")]
    BadBody(String),

    #[error("speech synthesis returned no audio")]
    EmptySynthesis,

    #[error("speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("audio upload failed: {0}")]
    Storage(String),

    #[error("usage record failed: {0}")]
    Record(String),

    #[error("link signing failed: {0}")]
    Link(String),
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::TextRequired => ErrorKind::Validation,
            ConvertError::EmptySynthesis => ErrorKind::EmptyResult,
            ConvertError::BadBody(_)
            | ConvertError::Synthesis(_)
            | ConvertError::Storage(_)
            | ConvertError::Record(_)
            | ConvertError::Link(_) => ErrorKind::Infrastructure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_exact() {
        // メッセージは応答契約の一部
        assert_eq!(ConvertError::TextRequired.to_string(), "text is required");
        assert_eq!(
            ConvertError::EmptySynthesis.to_string(),
            "speech synthesis returned no audio"
        );
    }

    #[test]
    fn kinds_classify_the_failure_site() {
        assert_eq!(ConvertError::TextRequired.kind(), ErrorKind::Validation);
        assert_eq!(ConvertError::EmptySynthesis.kind(), ErrorKind::EmptyResult);
        assert_eq!(
            ConvertError::Storage("boom".into()).kind(),
            ErrorKind::Infrastructure
        );
        assert_eq!(
            ConvertError::Record("boom".into()).kind(),
            ErrorKind::Infrastructure
        );
    }
}
