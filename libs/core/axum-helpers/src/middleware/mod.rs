//! Request middleware.
//!
//! - [`api_key`]: shared-secret gate on the `x-api-key` header
//! - [`security`]: defensive response headers

pub mod api_key;
pub mod security;

pub use api_key::{API_KEY_HEADER, FORBIDDEN_MESSAGE, require_api_key};
pub use security::security_headers;
