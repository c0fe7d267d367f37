pub mod api_response;
pub mod format;
pub mod serde_helpers;
