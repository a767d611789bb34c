use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::supplier::use_cases::create::{CreateSupplierParams, CreateSupplierUseCase};
use business::domain::supplier::use_cases::delete::{DeleteSupplierParams, DeleteSupplierUseCase};
use business::domain::supplier::use_cases::get_all::GetAllSuppliersUseCase;
use business::domain::supplier::use_cases::get_by_id::{
    GetSupplierByIdParams, GetSupplierByIdUseCase,
};
use business::domain::supplier::use_cases::update::{UpdateSupplierParams, UpdateSupplierUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::supplier::dto::{SupplierRequest, SupplierResponse};
use crate::api::tags::ApiTags;

pub struct SupplierApi {
    create_use_case: Arc<dyn CreateSupplierUseCase>,
    get_all_use_case: Arc<dyn GetAllSuppliersUseCase>,
    get_by_id_use_case: Arc<dyn GetSupplierByIdUseCase>,
    update_use_case: Arc<dyn UpdateSupplierUseCase>,
    delete_use_case: Arc<dyn DeleteSupplierUseCase>,
}

impl SupplierApi {
    pub fn new(
        create_use_case: Arc<dyn CreateSupplierUseCase>,
        get_all_use_case: Arc<dyn GetAllSuppliersUseCase>,
        get_by_id_use_case: Arc<dyn GetSupplierByIdUseCase>,
        update_use_case: Arc<dyn UpdateSupplierUseCase>,
        delete_use_case: Arc<dyn DeleteSupplierUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Supplier management API
#[OpenApi]
impl SupplierApi {
    /// Create a supplier
    #[oai(path = "/suppliers", method = "post", tag = "ApiTags::Suppliers")]
    async fn create_supplier(&self, body: Json<SupplierRequest>) -> CreateSupplierResponse {
        let params = CreateSupplierParams {
            name: body.0.name,
            country: body.0.country,
            active: body.0.active,
            preferred: body.0.preferred,
            lead_time_days: body.0.lead_time_days,
        };

        match self.create_use_case.execute(params).await {
            Ok(supplier) => CreateSupplierResponse::Created(Json(supplier.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateSupplierResponse::BadRequest(json),
                    _ => CreateSupplierResponse::InternalError(json),
                }
            }
        }
    }

    /// List suppliers ordered by id
    #[oai(path = "/suppliers", method = "get", tag = "ApiTags::Suppliers")]
    async fn get_all_suppliers(&self) -> GetAllSuppliersResponse {
        match self.get_all_use_case.execute().await {
            Ok(suppliers) => GetAllSuppliersResponse::Ok(Json(
                suppliers.into_iter().map(SupplierResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllSuppliersResponse::InternalError(json)
            }
        }
    }

    /// Get a supplier by id
    #[oai(path = "/suppliers/:id", method = "get", tag = "ApiTags::Suppliers")]
    async fn get_supplier_by_id(&self, id: Path<i32>) -> SupplierByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetSupplierByIdParams { id: id.0 })
            .await
        {
            Ok(supplier) => SupplierByIdResponse::Ok(Json(supplier.into())),
            Err(err) => SupplierByIdResponse::from_error(err.into_error_response()),
        }
    }

    /// Replace a supplier's attributes
    #[oai(path = "/suppliers/:id", method = "put", tag = "ApiTags::Suppliers")]
    async fn update_supplier(
        &self,
        id: Path<i32>,
        body: Json<SupplierRequest>,
    ) -> SupplierByIdResponse {
        let params = UpdateSupplierParams {
            id: id.0,
            name: body.0.name,
            country: body.0.country,
            active: body.0.active,
            preferred: body.0.preferred,
            lead_time_days: body.0.lead_time_days,
        };

        match self.update_use_case.execute(params).await {
            Ok(supplier) => SupplierByIdResponse::Ok(Json(supplier.into())),
            Err(err) => SupplierByIdResponse::from_error(err.into_error_response()),
        }
    }

    /// Delete a supplier and its price list entries
    #[oai(path = "/suppliers/:id", method = "delete", tag = "ApiTags::Suppliers")]
    async fn delete_supplier(&self, id: Path<i32>) -> DeleteSupplierResponse {
        match self
            .delete_use_case
            .execute(DeleteSupplierParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteSupplierResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteSupplierResponse::NotFound(json),
                    _ => DeleteSupplierResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateSupplierResponse {
    #[oai(status = 201)]
    Created(Json<SupplierResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllSuppliersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SupplierResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SupplierByIdResponse {
    #[oai(status = 200)]
    Ok(Json<SupplierResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl SupplierByIdResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteSupplierResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
