// ハンドラーエラー分類
//
// 内部ハンドラーが返すエラーを種別ごとに分類する。
// ラッパーはこの種別でレスポンスのステータスコードとメッセージを決定する。

use serde_json::error::Category;
use thiserror::Error;

use super::ApigError;

/// 予期しないエラーの内部表現
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 内部ハンドラーのエラー種別
#[derive(Debug, Error)]
pub enum HandlerError {
    /// 意図的なエラー（メッセージとステータスコードを利用者に返却）
    #[error(transparent)]
    Apig(#[from] ApigError),

    /// 入力JSONのデコード失敗（パーサーの詳細は返却しない）
    #[error("malformed JSON input: {0}")]
    MalformedJson(serde_json::Error),

    /// その他すべてのエラー
    #[error("unexpected error: {0}")]
    Unexpected(BoxError),
}

impl HandlerError {
    /// 任意のエラーを予期しないエラーとして包む
    pub fn unexpected(err: impl Into<BoxError>) -> Self {
        HandlerError::Unexpected(err.into())
    }
}

impl From<serde_json::Error> for HandlerError {
    /// 構文エラーと途中終了のみJSONデコード失敗として扱う
    ///
    /// 型不一致などのデータエラーは入力がJSONであるため、予期しないエラーに分類する。
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => HandlerError::MalformedJson(err),
            Category::Data | Category::Io => HandlerError::Unexpected(Box::new(err)),
        }
    }
}

impl From<BoxError> for HandlerError {
    fn from(err: BoxError) -> Self {
        HandlerError::Unexpected(err)
    }
}
