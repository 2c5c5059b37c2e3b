// Domain layer modules
pub mod apig_error;
pub mod error_policy;
pub mod handler_error;
pub mod input_validator;
pub mod proxy_request;
pub mod response_envelope;

// Re-exports
pub use apig_error::{ApigError, DEFAULT_ERROR_CODE};
pub use error_policy::{ErrorPolicy, ErrorPolicyParseError};
pub use handler_error::{BoxError, HandlerError};
pub use input_validator::{optional_fields_found, require_valid_inputs, required_fields_found};
pub use proxy_request::ProxyRequest;
pub use response_envelope::{
    DEFAULT_ERROR_MESSAGE, MALFORMED_JSON_MESSAGE, ResponseBody, ResponseEnvelope, SUCCESS_MESSAGE,
};
