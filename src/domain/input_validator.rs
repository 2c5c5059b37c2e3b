// 入力パラメータの必須・任意フィールド検証
//
// ビジネスロジック実行前に、入力マッピングに必要なキーが揃っているかを確認する。

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::ApigError;

/// 必須フィールド不足時のステータスコード
pub const INVALID_INPUT_CODE: u16 = 400;

/// 必須フィールドがすべて含まれているかを判定
///
/// `supplied`が未指定または空の場合は常に`false`。
/// `supplied`に余分なキーが含まれていても構わない。
pub fn required_fields_found(supplied: Option<&Map<String, Value>>, required: &[&str]) -> bool {
    match supplied {
        Some(map) if !map.is_empty() => required.iter().all(|key| map.contains_key(*key)),
        _ => false,
    }
}

/// 必須フィールドを検証し、不足していれば400エラーを返す
///
/// エラーメッセージには実際に渡されたキーの一覧を含める。
pub fn require_valid_inputs(
    supplied: Option<&Map<String, Value>>,
    required: &[&str],
) -> Result<(), ApigError> {
    if required_fields_found(supplied, required) {
        return Ok(());
    }

    let keys: Vec<&str> = supplied
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();

    Err(ApigError::with_code(
        format!("Invalid input parameters: {keys:?}"),
        INVALID_INPUT_CODE,
    ))
}

/// 任意フィールドのうち実際に渡されたものを返す
///
/// `params`が未指定または空の場合は`None`。
pub fn optional_fields_found<'f>(
    params: Option<&Map<String, Value>>,
    fields: &[&'f str],
) -> Option<BTreeSet<&'f str>> {
    let map = params.filter(|map| !map.is_empty())?;
    Some(
        fields
            .iter()
            .copied()
            .filter(|field| map.contains_key(*field))
            .collect(),
    )
}
