// Domain layer modules
pub mod domain;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;

// Re-exports
pub use application::{ApigHandler, ResponseWrapper};
pub use domain::{ApigError, ErrorPolicy, HandlerError};
