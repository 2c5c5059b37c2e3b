// 予期しないエラーの扱い方針
//
// 意図的なエラーとJSONデコード失敗以外のエラーをどう扱うかを決める。

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 予期しないエラーの扱い方針
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// エラーをLambdaランタイムにそのまま返す（ローカル開発用）
    Propagate,
    /// 詳細を含まない500レスポンスを返す（本番用）
    #[default]
    Generic,
    /// エラー内容をメッセージに含めた500レスポンスを返す（リモート検証用）
    Detailed,
}

/// 方針文字列のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error policy: {0} (expected propagate, generic or detailed)")]
pub struct ErrorPolicyParseError(pub String);

impl ErrorPolicy {
    /// 設定値としての文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Propagate => "propagate",
            ErrorPolicy::Generic => "generic",
            ErrorPolicy::Detailed => "detailed",
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = ErrorPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(ErrorPolicy::Propagate),
            "generic" => Ok(ErrorPolicy::Generic),
            "detailed" => Ok(ErrorPolicy::Detailed),
            _ => Err(ErrorPolicyParseError(s.to_string())),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_generic() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Generic);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Propagate".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Propagate));
        assert_eq!(" GENERIC ".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Generic));
        assert_eq!("detailed".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Detailed));
    }

    #[test]
    fn test_parse_unknown_value() {
        let err = "verbose".parse::<ErrorPolicy>().unwrap_err();
        assert_eq!(err, ErrorPolicyParseError("verbose".to_string()));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_display_matches_parse() {
        for policy in [ErrorPolicy::Propagate, ErrorPolicy::Generic, ErrorPolicy::Detailed] {
            assert_eq!(policy.to_string().parse::<ErrorPolicy>(), Ok(policy));
        }
    }
}
