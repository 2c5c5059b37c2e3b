// Infrastructure layer modules
pub mod config;
pub mod logging;

// Re-exports
pub use config::WrapperConfig;
pub use logging::{build_dispatch, build_dispatch_with_writer, init_logging};
