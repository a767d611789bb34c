use std::sync::Arc;

use chrono::NaiveDate;
use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::pricing::model::BestPriceQuery;
use business::domain::pricing::use_cases::query_best::QueryBestPriceUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pricing::dto::BestPriceResponse;
use crate::api::tags::ApiTags;

pub struct PricingApi {
    query_best_use_case: Arc<dyn QueryBestPriceUseCase>,
}

impl PricingApi {
    pub fn new(query_best_use_case: Arc<dyn QueryBestPriceUseCase>) -> Self {
        Self {
            query_best_use_case,
        }
    }
}

/// Best supplier price lookup
#[OpenApi]
impl PricingApi {
    /// Cheapest eligible offer for a SKU, quantity and day, in the requested currency
    ///
    /// Ties go to preferred suppliers, then shorter lead time, then lower supplier id.
    /// Answers are cached for a short window per (sku, qty, currency, date).
    #[oai(path = "/pricing/best", method = "get", tag = "ApiTags::Pricing")]
    async fn best_price(
        &self,
        sku: Query<String>,
        qty: Query<i32>,
        currency: Query<String>,
        date: Query<NaiveDate>,
    ) -> BestPriceHttpResponse {
        let query = BestPriceQuery {
            sku: sku.0,
            quantity: qty.0,
            currency: currency.0,
            date: date.0,
        };

        match self.query_best_use_case.execute(query).await {
            Ok(Some(result)) => BestPriceHttpResponse::Ok(Json(result.into())),
            Ok(None) => BestPriceHttpResponse::NotFound(Json(ErrorResponse::new(
                "NotFound",
                "pricing.no_eligible_supplier",
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => BestPriceHttpResponse::BadRequest(json),
                    _ => BestPriceHttpResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BestPriceHttpResponse {
    #[oai(status = 200)]
    Ok(Json<BestPriceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
