/// API Gatewayプロキシ統合レスポンスラッパー
///
/// ハンドラーの戻り値とエラーを捕捉し、プロキシ統合向けの
/// レスポンスエンベロープ（statusCode + JSON文字列body）に整形する。
///
/// # 処理フロー
/// 1. デフォルトエンベロープ（500、汎用エラーメッセージ）を用意
/// 2. 受信イベントをログ出力
/// 3. 内部ハンドラーを実行し、結果またはエラー種別に応じてエンベロープを更新
/// 4. 戻り値がない場合は`response`を省略し、bodyをJSON文字列化して返却
use std::sync::Arc;

use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use lambda_runtime::{Context, Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::instrument::WithSubscriber;
use tracing::{Dispatch, debug, error, info};

use crate::application::ApigHandler;
use crate::domain::{
    ErrorPolicy, HandlerError, MALFORMED_JSON_MESSAGE, ProxyRequest, ResponseEnvelope,
};
use crate::infrastructure::{WrapperConfig, build_dispatch};

/// ハンドラーをプロキシ統合レスポンス形式に適合させるラッパー
pub struct ResponseWrapper<H> {
    /// ラップ対象のハンドラー
    handler: H,
    /// 予期しないエラーの扱い方針
    error_policy: ErrorPolicy,
    /// 呼び出しごとに使用するロガー（未指定時は現在のサブスクライバー）
    dispatch: Option<Dispatch>,
}

impl<H> ResponseWrapper<H>
where
    H: ApigHandler,
{
    /// デフォルト方針（generic）でラッパーを作成
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            error_policy: ErrorPolicy::default(),
            dispatch: None,
        }
    }

    /// 設定からラッパーを作成
    ///
    /// エラー方針を反映し、設定されたログレベルのJSONロガーを注入する。
    pub fn with_config(handler: H, config: &WrapperConfig) -> Self {
        Self::new(handler)
            .with_error_policy(config.error_policy)
            .with_dispatch(build_dispatch(config.log_level))
    }

    /// 予期しないエラーの扱い方針を指定
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// 呼び出し時に使用するロガーを指定
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// 現在のエラー方針
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Lambdaランタイムからのイベントを処理
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<ApiGatewayProxyResponse, Error> {
        let (payload, context) = event.into_parts();
        self.invoke(payload, context).await
    }

    /// イベントとコンテキストでラップしたハンドラーを呼び出す
    ///
    /// # 戻り値
    /// * 通常はエンベロープ化したプロキシレスポンス
    /// * `ErrorPolicy::Propagate`で予期しないエラーが発生した場合のみ`Err`
    pub async fn invoke(
        &self,
        event: Value,
        context: Context,
    ) -> Result<ApiGatewayProxyResponse, Error> {
        match &self.dispatch {
            Some(dispatch) => {
                self.process(event, context)
                    .with_subscriber(dispatch.clone())
                    .await
            }
            None => self.process(event, context).await,
        }
    }

    async fn process(
        &self,
        event: Value,
        context: Context,
    ) -> Result<ApiGatewayProxyResponse, Error> {
        let mut envelope = ResponseEnvelope::default();

        info!(event = %event, "イベント受信");

        let request = ProxyRequest::new(&event);
        debug!(
            resource = request.resource().unwrap_or_default(),
            query_string_parameters = ?request.query_string_parameters(),
            body = request.body().unwrap_or_default(),
            "リクエスト受信"
        );

        let outcome = self
            .handler
            .handle(event, context)
            .await
            .and_then(|output| serde_json::to_value(output).map_err(HandlerError::unexpected));

        match outcome {
            Ok(value) => envelope.succeed(value),
            Err(HandlerError::Apig(err)) => {
                let message = format!("Error: {}", err.message());
                error!(status_code = err.code(), "{message}");
                envelope.fail(message, Some(err.code()));
            }
            Err(HandlerError::MalformedJson(err)) => {
                error!(error = %err, "{MALFORMED_JSON_MESSAGE}");
                envelope.fail(MALFORMED_JSON_MESSAGE, None);
            }
            Err(HandlerError::Unexpected(err)) => match self.error_policy {
                ErrorPolicy::Propagate => {
                    error!(error = %err, "予期しないエラー、ランタイムに伝播");
                    return Err(err);
                }
                ErrorPolicy::Generic => {
                    error!(error = %err, "予期しないエラー");
                }
                ErrorPolicy::Detailed => {
                    let message = format!("Error: {err}");
                    error!("{message}");
                    envelope.fail(message, None);
                }
            },
        }

        let response = envelope.into_proxy_response()?;
        info!(response = %serde_json::to_string(&response)?, "レスポンス返却");

        Ok(response)
    }
}

impl<H> ResponseWrapper<H>
where
    H: ApigHandler + 'static,
{
    /// Lambdaランタイムに登録して実行
    pub async fn run(self) -> Result<(), Error> {
        let wrapper = Arc::new(self);
        lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
            let wrapper = Arc::clone(&wrapper);
            async move { wrapper.handle(event).await }
        }))
        .await
    }
}
