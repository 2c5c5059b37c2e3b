// アプリケーション層モジュール
pub mod apig_handler;
pub mod response_wrapper;

// 再エクスポート
pub use apig_handler::ApigHandler;
pub use response_wrapper::ResponseWrapper;
