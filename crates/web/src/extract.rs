use axum::extract::FromRequest;

use crate::error::WebError;

/// `axum::Json` whose rejections are answered with the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct JsonBody<T>(pub T);
