use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catch-all fault wrapper. Any failure talking to the items API surfaces
/// as a plain 500; there is no recovery or retry at this layer.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
