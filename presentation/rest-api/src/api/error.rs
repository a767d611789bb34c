use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// The store errors every resource maps the same way.
pub fn repository_error_response(
    error: &business::domain::errors::RepositoryError,
) -> (StatusCode, &'static str, &'static str) {
    use business::domain::errors::RepositoryError;

    match error {
        RepositoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "repository.not_found"),
        RepositoryError::Conflict => (StatusCode::CONFLICT, "Conflict", "repository.conflict"),
        RepositoryError::Persistence | RepositoryError::DatabaseError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            "repository.persistence",
        ),
    }
}
