use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::api::dto::ErrorResponse;
use crate::domain::error::UserError;

impl IntoResponse for UserError {
    fn into_response(self) -> axum::response::Response {
        let error = self.to_string();

        match self {
            UserError::NotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error })).into_response()
            }
            UserError::Validation(_) | UserError::UnknownFields(_) | UserError::DuplicateEmail => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
        }
    }
}
