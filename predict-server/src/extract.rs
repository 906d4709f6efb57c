//! Request extractors

use axum::extract::FromRequest;

use crate::AppError;

/// `Json<T>` whose rejection is an `AppError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
