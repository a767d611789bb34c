use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::pricing::errors::PricingError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for PricingError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PricingError::UnknownCurrency(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "pricing.unknown_currency",
            ),
            PricingError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "pricing.invalid_quantity",
            ),
            PricingError::SkuEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "pricing.sku_empty",
            ),
            PricingError::Repository(e) => repository_error_response(e),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
