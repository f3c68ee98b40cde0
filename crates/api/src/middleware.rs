/// Bearer-token verification and the authenticated caller extractor
pub mod auth;
/// Mapping of domain errors to HTTP responses
pub mod error_handling;
