// ラッパー設定
//
// 環境変数から予期しないエラーの扱い方針とログレベルを読み込む。
// 未設定またはパースエラーの場合はデフォルト値を使用する。

use tracing::level_filters::LevelFilter;
use tracing::{info, warn};

use crate::domain::ErrorPolicy;

/// 環境変数名: 予期しないエラーの扱い方針
pub const ENV_ERROR_POLICY: &str = "APIG_ERROR_POLICY";

/// 環境変数名: ラッパーのログレベル
pub const ENV_LOG_LEVEL: &str = "APIG_LOG_LEVEL";

/// デフォルトのログレベル
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// ラッパー設定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapperConfig {
    /// 予期しないエラーの扱い方針
    pub error_policy: ErrorPolicy,
    /// ラッパーに注入するロガーのレベル
    pub log_level: LevelFilter,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl WrapperConfig {
    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - APIG_ERROR_POLICY: propagate / generic / detailed（デフォルト: generic）
    /// - APIG_LOG_LEVEL: trace / debug / info / warn / error / off（デフォルト: info）
    pub fn from_env() -> Self {
        let error_policy = parse_env(ENV_ERROR_POLICY, ErrorPolicy::default());
        let log_level = parse_env(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL);

        info!(
            error_policy = %error_policy,
            log_level = %log_level,
            "WrapperConfig loaded"
        );

        Self {
            error_policy,
            log_level,
        }
    }
}

/// 環境変数から値を読み込む
///
/// 未設定またはパースエラーの場合はデフォルト値を返す。
fn parse_env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    key,
                    value = %value,
                    default = %default,
                    "Environment variable parse error, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}
