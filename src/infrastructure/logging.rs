/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式での出力をサポートする。
/// ラッパーへ注入するための`Dispatch`もここで構築する。
use std::sync::Once;

use tracing::Dispatch;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// JSON形式での構造化ログ出力を設定し、環境変数`RUST_LOG`または
/// デフォルトのログレベル（info）でフィルタリングを行う。
///
/// この関数は複数回呼び出しても安全で、最初の呼び出しのみ初期化を実行する。
pub fn init_logging() {
    INIT.call_once(|| {
        // 環境変数からログレベルを取得、デフォルトはinfo
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // 既に他のサブスクライバーが登録されていても失敗させない
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer(std::io::stdout))
            .try_init();
    });
}

/// 指定レベルでフィルタリングするJSONロガーを構築する（標準出力）
///
/// グローバルには登録せず、`ResponseWrapper`に注入して使用する。
///
/// # 使用例
/// ```
/// use apigateway::infrastructure::build_dispatch;
/// use tracing::level_filters::LevelFilter;
///
/// let dispatch = build_dispatch(LevelFilter::DEBUG);
/// tracing::dispatcher::with_default(&dispatch, || {
///     tracing::debug!("注入されたロガーで出力");
/// });
/// ```
pub fn build_dispatch(level: LevelFilter) -> Dispatch {
    build_dispatch_with_writer(level, std::io::stdout)
}

/// 出力先を指定してJSONロガーを構築する
pub fn build_dispatch_with_writer<W>(level: LevelFilter, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::registry()
        .with(level)
        .with(json_layer(writer));
    Dispatch::new(subscriber)
}

/// JSON形式のログレイヤー（Lambda/CloudWatch向け）
///
/// グローバル初期化と注入用ロガーで同じ出力項目を使う。
fn json_layer<S, W>(writer: W) -> tracing_subscriber::fmt::Layer<S, JsonFields, Format<Json>, W>
where
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(false)
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
///
/// # 注意
/// この関数はテスト専用であり、本番環境では`init_logging`を使用すること。
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
