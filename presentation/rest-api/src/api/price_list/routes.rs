use std::sync::Arc;

use chrono::NaiveDate;
use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::price_list::model::UploadResult;
use business::domain::price_list::use_cases::list::{
    ListPriceEntriesParams, ListPriceEntriesUseCase,
};
use business::domain::price_list::use_cases::upload::{
    UploadPriceListParams, UploadPriceListUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::price_list::dto::{
    PriceEntryPageResponse, ProblemResponse, UploadAcceptedResponse, UploadPriceListForm,
};
use crate::api::tags::ApiTags;

pub struct PriceListApi {
    upload_use_case: Arc<dyn UploadPriceListUseCase>,
    list_use_case: Arc<dyn ListPriceEntriesUseCase>,
}

impl PriceListApi {
    pub fn new(
        upload_use_case: Arc<dyn UploadPriceListUseCase>,
        list_use_case: Arc<dyn ListPriceEntriesUseCase>,
    ) -> Self {
        Self {
            upload_use_case,
            list_use_case,
        }
    }
}

fn problem(title: &str, detail: &str) -> Json<ProblemResponse> {
    Json(ProblemResponse {
        title: title.to_string(),
        detail: detail.to_string(),
    })
}

/// Price list ingestion and browsing
#[OpenApi]
impl PriceListApi {
    /// Upload a price list CSV
    ///
    /// The whole file is validated before anything is stored. The first bad row is reported
    /// and the store is left untouched.
    #[oai(path = "/prices/upload", method = "post", tag = "ApiTags::Prices")]
    async fn upload_price_list(&self, form: UploadPriceListForm) -> UploadPriceListResponse {
        let Some(file) = form.file else {
            return UploadPriceListResponse::Rejected(problem(
                "Missing file",
                "A file must be provided in the 'file' field.",
            ));
        };

        let csv = match file.into_string().await {
            Ok(csv) => csv,
            Err(_) => {
                return UploadPriceListResponse::Rejected(problem(
                    "Invalid CSV",
                    "The uploaded file is not UTF-8 text.",
                ));
            }
        };

        match self
            .upload_use_case
            .execute(UploadPriceListParams { csv })
            .await
        {
            Ok(UploadResult::Accepted { rows }) => {
                UploadPriceListResponse::Ok(Json(UploadAcceptedResponse {
                    accepted: true,
                    rows: rows as u64,
                }))
            }
            Ok(UploadResult::Rejected(rejection)) => {
                UploadPriceListResponse::Rejected(Json(rejection.into()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => UploadPriceListResponse::Conflict(json),
                    _ => UploadPriceListResponse::InternalError(json),
                }
            }
        }
    }

    /// Browse stored price list entries
    ///
    /// Ordered by SKU, supplier and start of validity.
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/prices", method = "get", tag = "ApiTags::Prices")]
    async fn list_price_entries(
        &self,
        sku: Query<Option<String>>,
        #[oai(name = "validOn")] valid_on: Query<Option<NaiveDate>>,
        currency: Query<Option<String>>,
        #[oai(name = "supplierId")] supplier_id: Query<Option<i32>>,
        page: Query<Option<u32>>,
        #[oai(name = "pageSize")] page_size: Query<Option<u32>>,
    ) -> ListPriceEntriesResponse {
        let params = ListPriceEntriesParams {
            sku: sku.0,
            valid_on: valid_on.0,
            currency: currency.0,
            supplier_id: supplier_id.0,
            page: page.0,
            page_size: page_size.0,
        };

        match self.list_use_case.execute(params).await {
            Ok(page) => ListPriceEntriesResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListPriceEntriesResponse::BadRequest(json),
                    _ => ListPriceEntriesResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadPriceListResponse {
    #[oai(status = 200)]
    Ok(Json<UploadAcceptedResponse>),
    #[oai(status = 400)]
    Rejected(Json<ProblemResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListPriceEntriesResponse {
    #[oai(status = 200)]
    Ok(Json<PriceEntryPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
