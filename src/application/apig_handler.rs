// ラップ対象ハンドラーのトレイト
//
// (event, context)を受け取り、JSONシリアライズ可能な値かHandlerErrorを返す。

use std::future::Future;

use async_trait::async_trait;
use lambda_runtime::Context;
use serde::Serialize;
use serde_json::Value;

use crate::domain::HandlerError;

/// ResponseWrapperでラップできるハンドラー
///
/// 状態を持つハンドラーは構造体に直接実装する。
/// `async fn(Value, Context) -> Result<T, HandlerError>`はそのまま実装を満たす。
#[async_trait]
pub trait ApigHandler: Send + Sync {
    /// 成功時の戻り値（レスポンス本文の`response`になる）
    ///
    /// NaNや無限大はJSONで表現できず`null`にシリアライズされる。
    /// 戻り値全体が`null`になった場合は`response`が省略される。
    type Output: Serialize + Send;

    /// イベントを処理する
    async fn handle(&self, event: Value, context: Context) -> Result<Self::Output, HandlerError>;
}

#[async_trait]
impl<F, Fut, T> ApigHandler for F
where
    F: Fn(Value, Context) -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, HandlerError>> + Send + 'static,
    T: Serialize + Send + 'static,
{
    type Output = T;

    async fn handle(&self, event: Value, context: Context) -> Result<T, HandlerError> {
        (self)(event, context).await
    }
}
