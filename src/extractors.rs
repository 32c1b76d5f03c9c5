use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body whose rejections are reported as [`AppError`]
///
/// Malformed JSON, a wrong content type or a field of the wrong type all come
/// back as a 400 with the usual `{"error": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path parameters whose rejections are reported as [`AppError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
