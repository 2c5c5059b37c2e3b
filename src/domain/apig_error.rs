// 利用者に返却する意図的なエラー
//
// ビジネスロジックが特定のステータスコードとメッセージを呼び出し元に
// 伝えたい場合に使用する。それ以外のエラーはメッセージを返却しない。

use thiserror::Error;

/// ステータスコード未指定時のデフォルト値
pub const DEFAULT_ERROR_CODE: u16 = 500;

/// API Gatewayに返却するエラー（メッセージとステータスコード）
///
/// # 使用例
/// ```
/// use apigateway::domain::ApigError;
///
/// let err = ApigError::with_code("Payment required", 402);
/// assert_eq!(err.code(), 402);
/// assert_eq!(err.message(), "Payment required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApigError {
    /// 利用者に返却するメッセージ
    message: String,
    /// HTTPステータスコード
    code: u16,
}

impl ApigError {
    /// デフォルトのステータスコード（500）でエラーを作成
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_code(message, DEFAULT_ERROR_CODE)
    }

    /// ステータスコードを指定してエラーを作成
    pub fn with_code(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// メッセージを取得
    pub fn message(&self) -> &str {
        &self.message
    }

    /// ステータスコードを取得
    pub fn code(&self) -> u16 {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_code() {
        let err = ApigError::new("boom");
        assert_eq!(err.code(), 500);
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_with_code() {
        let err = ApigError::with_code("Not found", 404);
        assert_eq!(err.code(), 404);
        assert_eq!(err.message(), "Not found");
    }

    #[test]
    fn test_display_is_message_only() {
        let err = ApigError::with_code("Payment required", 402);
        assert_eq!(err.to_string(), "Payment required");
    }
}
