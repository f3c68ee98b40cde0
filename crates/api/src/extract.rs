//! Drop-in replacements for axum's `Json` and `Path` extractors whose
//! rejections go through [`AppError`], so a bad body or URL segment gets the
//! same `{ "error": ... }` response and log line as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::middleware::error_handling::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
