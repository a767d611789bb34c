use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::supplier::errors::SupplierError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for SupplierError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SupplierError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "supplier.name_empty",
            ),
            SupplierError::NegativeLeadTime => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "supplier.negative_lead_time",
            ),
            SupplierError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "supplier.not_found"),
            SupplierError::Repository(e) => repository_error_response(e),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = SupplierError::NegativeLeadTime.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "supplier.negative_lead_time");
    }

    #[test]
    fn should_map_missing_supplier_to_not_found() {
        let (status, _) = SupplierError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_store_failure_to_internal_error() {
        let (status, json) =
            SupplierError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
