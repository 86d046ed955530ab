//! Request and response types for the HTTP surface

pub mod documents;
pub mod error;
pub mod json;
pub mod query;

pub use documents::{DocumentUploadRequest, DocumentUploadResponse, DomainsResponse};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use query::QueryRequest;
