use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::price_list::errors::PriceListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for PriceListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PriceListError::InvalidPage => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "price_list.invalid_page",
            ),
            PriceListError::Repository(e) => repository_error_response(e),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_invalid_paging_to_bad_request() {
        let (status, json) = PriceListError::InvalidPage.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "price_list.invalid_page");
    }

    #[test]
    fn should_map_store_conflict_to_conflict() {
        let (status, json) =
            PriceListError::Repository(RepositoryError::Conflict).into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "repository.conflict");
    }
}
