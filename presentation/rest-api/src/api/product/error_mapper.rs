use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::SkuEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.sku_empty",
            ),
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::SkuTaken => (StatusCode::CONFLICT, "Conflict", "product.sku_taken"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(e) => repository_error_response(e),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_taken_sku_to_conflict() {
        let (status, json) = ProductError::SkuTaken.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "product.sku_taken");
    }

    #[test]
    fn should_map_blank_sku_to_bad_request() {
        let (status, _) = ProductError::SkuEmpty.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
