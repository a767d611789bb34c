use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{Cors, SizeLimit, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// Largest accepted request body, sized for price list uploads.
const MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

pub struct Server;

impl Server {
    /// Routes plus Swagger UI, with the middleware stack applied.
    pub fn app(container: DependencyContainer, server_url: &str, cors: Cors) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.price_list_api,
                container.pricing_api,
                container.product_api,
                container.supplier_api,
            ),
            "Supplier Pricing API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(SizeLimit::new(MAX_BODY_BYTES))
            .with(cors)
            .with(Tracing)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, &format!("http://{}", addr), config.cors);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
