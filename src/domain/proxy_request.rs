// API Gatewayプロキシリクエストの読み取りビュー
//
// イベントは外部所有の任意JSONとして受け取り、必要なフィールドだけを参照する。

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::HandlerError;

/// プロキシ統合イベントへの読み取り専用ビュー
#[derive(Debug, Clone, Copy)]
pub struct ProxyRequest<'a> {
    event: &'a Value,
}

impl<'a> ProxyRequest<'a> {
    /// イベントからビューを作成
    pub fn new(event: &'a Value) -> Self {
        Self { event }
    }

    /// リソースパス（例: `/items/{id}`）
    pub fn resource(&self) -> Option<&'a str> {
        self.str_field("resource")
    }

    /// リクエストパス
    pub fn path(&self) -> Option<&'a str> {
        self.str_field("path")
    }

    /// HTTPメソッド
    pub fn http_method(&self) -> Option<&'a str> {
        self.str_field("httpMethod")
    }

    /// クエリ文字列パラメータ（未指定時はAPI Gatewayが`null`を送るため`None`）
    pub fn query_string_parameters(&self) -> Option<&'a Map<String, Value>> {
        self.object_field("queryStringParameters")
    }

    /// パスパラメータ
    pub fn path_parameters(&self) -> Option<&'a Map<String, Value>> {
        self.object_field("pathParameters")
    }

    /// 生のリクエスト本文
    pub fn body(&self) -> Option<&'a str> {
        self.str_field("body")
    }

    /// リクエスト本文をJSONとしてデコード
    ///
    /// 本文が存在しない場合も不正なJSONとして扱う。
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        let body = self.body().unwrap_or_default();
        Ok(serde_json::from_str(body)?)
    }

    fn str_field(&self, key: &str) -> Option<&'a str> {
        self.event.get(key).and_then(Value::as_str)
    }

    fn object_field(&self, key: &str) -> Option<&'a Map<String, Value>> {
        self.event.get(key).and_then(Value::as_object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn sample_event() -> Value {
        json!({
            "resource": "/items/{id}",
            "path": "/items/42",
            "httpMethod": "POST",
            "queryStringParameters": {"verbose": "true"},
            "pathParameters": {"id": "42"},
            "body": "{\"name\": \"widget\", \"count\": 3}"
        })
    }

    #[test]
    fn test_accessors() {
        let event = sample_event();
        let request = ProxyRequest::new(&event);

        assert_eq!(request.resource(), Some("/items/{id}"));
        assert_eq!(request.path(), Some("/items/42"));
        assert_eq!(request.http_method(), Some("POST"));
        assert_eq!(
            request.query_string_parameters().and_then(|q| q.get("verbose")),
            Some(&json!("true"))
        );
        assert_eq!(
            request.path_parameters().and_then(|p| p.get("id")),
            Some(&json!("42"))
        );
    }

    #[test]
    fn test_null_fields_are_none() {
        let event = json!({
            "resource": "/",
            "queryStringParameters": null,
            "body": null
        });
        let request = ProxyRequest::new(&event);

        assert!(request.query_string_parameters().is_none());
        assert!(request.path_parameters().is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_json_body_typed() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Item {
            name: String,
            count: u32,
        }

        let event = sample_event();
        let item: Item = ProxyRequest::new(&event).json_body().unwrap();
        assert_eq!(
            item,
            Item {
                name: "widget".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn test_json_body_malformed() {
        let event = json!({"body": "name=widget"});
        let result = ProxyRequest::new(&event).json_body::<Value>();
        assert!(matches!(result, Err(HandlerError::MalformedJson(_))));
    }

    #[test]
    fn test_json_body_missing() {
        let event = json!({"resource": "/"});
        let result = ProxyRequest::new(&event).json_body::<Value>();
        assert!(matches!(result, Err(HandlerError::MalformedJson(_))));
    }
}
