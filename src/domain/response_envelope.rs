// プロキシ統合レスポンスのエンベロープ
//
// ステータスコードと本文（message / response）を保持し、
// 最終的にbodyをJSON文字列化したAPI Gatewayプロキシレスポンスへ変換する。

use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// エラー時のデフォルトメッセージ
pub const DEFAULT_ERROR_MESSAGE: &str = "Error saving data. Check logs for more info.";

/// 成功時のメッセージ
pub const SUCCESS_MESSAGE: &str = "Success";

/// JSONデコード失敗時のメッセージ
pub const MALFORMED_JSON_MESSAGE: &str = "Input data is not JSON";

/// デフォルトのステータスコード
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// 成功時のステータスコード
pub const SUCCESS_STATUS_CODE: u16 = 200;

/// レスポンス本文
///
/// `response`が`None`の場合はシリアライズ時にキーごと省略される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    /// 利用者向けメッセージ（常に存在）
    pub message: String,
    /// ハンドラーの戻り値
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

/// ステータスコードと本文を持つレスポンスエンベロープ
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    /// HTTPステータスコード
    pub status_code: u16,
    /// レスポンス本文
    pub body: ResponseBody,
}

impl Default for ResponseEnvelope {
    /// ハンドラー呼び出し前の初期状態（500、汎用エラーメッセージ、空オブジェクト）
    fn default() -> Self {
        Self {
            status_code: DEFAULT_STATUS_CODE,
            body: ResponseBody {
                message: DEFAULT_ERROR_MESSAGE.to_string(),
                response: Some(Value::Object(Default::default())),
            },
        }
    }
}

impl ResponseEnvelope {
    /// 成功結果を反映
    ///
    /// `null`は「戻り値なし」として扱い、`response`キーを省略する。
    pub fn succeed(&mut self, value: Value) {
        self.status_code = SUCCESS_STATUS_CODE;
        self.body.message = SUCCESS_MESSAGE.to_string();
        self.body.response = match value {
            Value::Null => None,
            other => Some(other),
        };
    }

    /// エラーメッセージを反映
    ///
    /// ステータスコードが指定されない場合は現在の値を維持する。
    pub fn fail(&mut self, message: impl Into<String>, code: Option<u16>) {
        self.body.message = message.into();
        if let Some(code) = code {
            self.status_code = code;
        }
    }

    /// 本文をJSON文字列にシリアライズ
    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }

    /// API Gatewayプロキシレスポンスに変換
    pub fn into_proxy_response(self) -> Result<ApiGatewayProxyResponse, serde_json::Error> {
        let body = self.body_json()?;
        Ok(ApiGatewayProxyResponse {
            status_code: i64::from(self.status_code),
            body: Some(Body::Text(body)),
            ..Default::default()
        })
    }
}
