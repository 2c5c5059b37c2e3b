/// エコーLambdaエントリポイント
///
/// API Gatewayプロキシ統合で受け取ったクエリパラメータ（POST時は本文も）を
/// 加工して返却するサンプル。ResponseWrapperによりレスポンスが整形される。
///
/// # クエリパラメータ
/// - message（必須）: 返却する文字列
/// - repeat（任意）: 繰り返し回数
/// - upper（任意）: "true"の場合は大文字化
use apigateway::domain::{ApigError, ProxyRequest, optional_fields_found, require_valid_inputs};
use apigateway::infrastructure::{WrapperConfig, init_logging};
use apigateway::{HandlerError, ResponseWrapper};
use lambda_runtime::{Context, Error};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// 繰り返し回数の上限
const MAX_REPEAT: usize = 10;

/// エコー結果
#[derive(Debug, Serialize)]
struct EchoResponse {
    /// 加工後のメッセージ
    message: String,
    /// 指定された任意パラメータ名
    options: Vec<String>,
    /// POST本文（JSON）
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let config = WrapperConfig::from_env();
    info!(error_policy = %config.error_policy, "エコーLambda関数を初期化");

    ResponseWrapper::with_config(handler, &config).run().await
}

/// クエリパラメータを検証してメッセージを返却する
async fn handler(event: Value, _context: Context) -> Result<EchoResponse, HandlerError> {
    let request = ProxyRequest::new(&event);
    let params = request.query_string_parameters();

    require_valid_inputs(params, &["message"])?;

    let mut message = params
        .and_then(|p| p.get("message"))
        .and_then(Value::as_str)
        .ok_or_else(|| ApigError::with_code("message must be a string", 400))?
        .to_string();

    let options = optional_fields_found(params, &["repeat", "upper"]).unwrap_or_default();

    if options.contains("upper") && param_str(&event, "upper") == Some("true") {
        message = message.to_uppercase();
    }

    if options.contains("repeat") {
        let count = param_str(&event, "repeat")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| (1..=MAX_REPEAT).contains(n))
            .ok_or_else(|| {
                ApigError::with_code(format!("repeat must be between 1 and {MAX_REPEAT}"), 400)
            })?;
        message = vec![message; count].join(" ");
    }

    let payload = match request.http_method() {
        Some("POST") => Some(request.json_body::<Value>()?),
        _ => None,
    };

    Ok(EchoResponse {
        message,
        options: options.into_iter().map(str::to_string).collect(),
        payload,
    })
}

/// クエリパラメータを文字列として取得
fn param_str<'a>(event: &'a Value, key: &str) -> Option<&'a str> {
    ProxyRequest::new(event)
        .query_string_parameters()
        .and_then(|p| p.get(key))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_lambda_events::apigw::ApiGatewayProxyResponse;
    use aws_lambda_events::encodings::Body;
    use serde_json::json;

    fn get_event(params: Value) -> Value {
        json!({
            "resource": "/echo",
            "path": "/echo",
            "httpMethod": "GET",
            "queryStringParameters": params,
            "body": null
        })
    }

    fn body_json(response: &ApiGatewayProxyResponse) -> Value {
        match &response.body {
            Some(Body::Text(text)) => serde_json::from_str(text).unwrap(),
            other => panic!("予期しないBody型: {other:?}"),
        }
    }

    async fn invoke(event: Value) -> ApiGatewayProxyResponse {
        ResponseWrapper::new(handler)
            .invoke(event, Context::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_echo_message() {
        let response = invoke(get_event(json!({"message": "hello"}))).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body_json(&response),
            json!({"message": "Success", "response": {"message": "hello", "options": []}})
        );
    }

    #[tokio::test]
    async fn test_echo_with_options() {
        let response = invoke(get_event(json!({
            "message": "hi",
            "repeat": "3",
            "upper": "true"
        })))
        .await;

        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        assert_eq!(body["response"]["message"], "HI HI HI");
        assert_eq!(body["response"]["options"], json!(["repeat", "upper"]));
    }

    #[tokio::test]
    async fn test_missing_message_rejected() {
        let response = invoke(get_event(json!({"repeat": "2"}))).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response)["message"],
            r#"Error: Invalid input parameters: ["repeat"]"#
        );
    }

    #[tokio::test]
    async fn test_no_query_parameters_rejected() {
        let response = invoke(get_event(Value::Null)).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response)["message"],
            "Error: Invalid input parameters: []"
        );
    }

    #[tokio::test]
    async fn test_repeat_out_of_range() {
        let response = invoke(get_event(json!({"message": "hi", "repeat": "100"}))).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response)["message"],
            "Error: repeat must be between 1 and 10"
        );
    }

    #[tokio::test]
    async fn test_post_with_json_body() {
        let mut event = get_event(json!({"message": "hi"}));
        event["httpMethod"] = json!("POST");
        event["body"] = json!("{\"id\": 1}");

        let response = invoke(event).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(body_json(&response)["response"]["payload"], json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_post_with_malformed_body() {
        let mut event = get_event(json!({"message": "hi"}));
        event["httpMethod"] = json!("POST");
        event["body"] = json!("id=1");

        let response = invoke(event).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(body_json(&response)["message"], "Input data is not JSON");
    }
}
