use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::FeedError;

#[derive(Debug)]
struct ConflictError(String);

impl std::fmt::Display for ConflictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConflictError {}

#[derive(Debug)]
struct NotFoundError(String);

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for NotFoundError {}

#[derive(Debug)]
struct BadRequestError(String);

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequestError {}

/// Unified error type for HTTP responses. Renders as `{"error": "..."}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self(ConflictError(msg.into()).into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(NotFoundError(msg.into()).into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.0.is::<ConflictError>() {
            StatusCode::CONFLICT
        } else if self.0.is::<NotFoundError>() {
            StatusCode::NOT_FOUND
        } else if self.0.is::<BadRequestError>() {
            StatusCode::BAD_REQUEST
        } else if let Some(e) = self.0.downcast_ref::<FeedError>() {
            match e {
                FeedError::UnknownFilter(_) => StatusCode::BAD_REQUEST,
                FeedError::OrdersNotFound(_)
                | FeedError::Io { .. }
                | FeedError::Json { .. }
                | FeedError::Yaml { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.0, "request rejected");
        }

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_409() {
        let response = AppError::conflict("already responded").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::not_found("order 99 not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::bad_request("unknown filter: free").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_filter_maps_to_400() {
        let err: AppError = FeedError::UnknownFilter("pricey".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn io_error_maps_to_500() {
        let err: AppError = FeedError::OrdersNotFound("data/orders.json".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
