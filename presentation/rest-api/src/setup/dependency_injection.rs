use std::sync::Arc;

use logger::TracingLogger;
use persistence::memory::{InMemoryCatalog, InMemoryStore};
use persistence::price_list::repository::PriceListRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::supplier::repository::SupplierRepositoryPostgres;

use business::application::price_list::list::ListPriceEntriesUseCaseImpl;
use business::application::price_list::upload::UploadPriceListUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::pricing::cached_query_best::CachedQueryBestPriceUseCase;
use business::application::pricing::query_best::QueryBestPriceUseCaseImpl;
use business::application::supplier::create::CreateSupplierUseCaseImpl;
use business::application::supplier::delete::DeleteSupplierUseCaseImpl;
use business::application::supplier::get_all::GetAllSuppliersUseCaseImpl;
use business::application::supplier::get_by_id::GetSupplierByIdUseCaseImpl;
use business::application::supplier::update::UpdateSupplierUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::price_list::repository::PriceListRepository;
use business::domain::pricing::rate_converter::RateConverter;
use business::domain::pricing::services::RateProvider;
use business::domain::product::repository::ProductRepository;
use business::domain::supplier::repository::SupplierRepository;

use crate::api::health::routes::Api as HealthApi;
use crate::api::price_list::routes::PriceListApi;
use crate::api::pricing::routes::PricingApi;
use crate::api::product::routes::ProductApi;
use crate::api::supplier::routes::SupplierApi;
use crate::config::pricing_config::PricingConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub price_list_api: PriceListApi,
    pub pricing_api: PricingApi,
    pub product_api: ProductApi,
    pub supplier_api: SupplierApi,
}

impl DependencyContainer {
    /// Wires every use case over Postgres when a pool is given, otherwise over one shared
    /// in-memory store.
    pub fn new(pool: Option<sqlx::PgPool>, pricing: PricingConfig) -> Self {
        match pool {
            Some(pool) => {
                let price_lists: Arc<dyn PriceListRepository> =
                    Arc::new(PriceListRepositoryPostgres::new(pool.clone()));
                let products: Arc<dyn ProductRepository> =
                    Arc::new(ProductRepositoryPostgres::new(pool.clone()));
                let suppliers: Arc<dyn SupplierRepository> =
                    Arc::new(SupplierRepositoryPostgres::new(pool));
                Self::with_repositories(price_lists, products, suppliers, pricing, "postgres")
            }
            None => {
                let memory = Arc::new(InMemoryStore::new());
                let price_lists: Arc<dyn PriceListRepository> = memory.clone();
                let suppliers: Arc<dyn SupplierRepository> = memory;
                let products: Arc<dyn ProductRepository> = Arc::new(InMemoryCatalog::new());
                Self::with_repositories(price_lists, products, suppliers, pricing, "memory")
            }
        }
    }

    pub fn with_repositories(
        price_lists: Arc<dyn PriceListRepository>,
        products: Arc<dyn ProductRepository>,
        suppliers: Arc<dyn SupplierRepository>,
        pricing: PricingConfig,
        store: &'static str,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());
        let rates: Arc<dyn RateProvider> = Arc::new(RateConverter::new(pricing.rates));

        // Pricing: the cache decorates the direct lookup.
        let query_best = Arc::new(QueryBestPriceUseCaseImpl {
            repository: price_lists.clone(),
            rates,
            logger: logger.clone(),
        });
        let cached_query_best = Arc::new(CachedQueryBestPriceUseCase::new(
            query_best,
            pricing.cache_ttl,
            logger.clone(),
        ));

        // Price list use cases
        let upload_use_case = Arc::new(UploadPriceListUseCaseImpl {
            repository: price_lists.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListPriceEntriesUseCaseImpl {
            repository: price_lists,
            logger: logger.clone(),
        });

        // Product use cases
        let create_product = Arc::new(CreateProductUseCaseImpl {
            repository: products.clone(),
            logger: logger.clone(),
        });
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            repository: products.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id = Arc::new(GetProductByIdUseCaseImpl {
            repository: products.clone(),
            logger: logger.clone(),
        });
        let update_product = Arc::new(UpdateProductUseCaseImpl {
            repository: products.clone(),
            logger: logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl {
            repository: products,
            logger: logger.clone(),
        });

        // Supplier use cases
        let create_supplier = Arc::new(CreateSupplierUseCaseImpl {
            repository: suppliers.clone(),
            logger: logger.clone(),
        });
        let get_all_suppliers = Arc::new(GetAllSuppliersUseCaseImpl {
            repository: suppliers.clone(),
            logger: logger.clone(),
        });
        let get_supplier_by_id = Arc::new(GetSupplierByIdUseCaseImpl {
            repository: suppliers.clone(),
            logger: logger.clone(),
        });
        let update_supplier = Arc::new(UpdateSupplierUseCaseImpl {
            repository: suppliers.clone(),
            logger: logger.clone(),
        });
        let delete_supplier = Arc::new(DeleteSupplierUseCaseImpl {
            repository: suppliers,
            logger,
        });

        Self {
            health_api: HealthApi::new(store),
            price_list_api: PriceListApi::new(upload_use_case, list_use_case),
            pricing_api: PricingApi::new(cached_query_best),
            product_api: ProductApi::new(
                create_product,
                get_all_products,
                get_product_by_id,
                update_product,
                delete_product,
            ),
            supplier_api: SupplierApi::new(
                create_supplier,
                get_all_suppliers,
                get_supplier_by_id,
                update_supplier,
                delete_supplier,
            ),
        }
    }
}
