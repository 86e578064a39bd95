//! # Storefront Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging and optional OTLP span export
//! - Connect the repository adapter selected by `DATABASE_URL`
//! - Build the Stripe gateway and the shop service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shop_hex::{ShopService, inbound::HttpServer};
use shop_repo::{Backend, MySqlRepo, SqliteRepo};
use shop_stripe::StripeGateway;
use shop_types::StoreRepository;

use config::{Config, LogFormat};

fn init_tracer(endpoint: &str) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("storefront"), provider))
}

async fn serve<R: StoreRepository>(
    repo: R,
    gateway: StripeGateway,
    port: u16,
) -> anyhow::Result<()> {
    let service = ShopService::new(repo, gateway);
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", port);

    server.run(&addr).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    let (telemetry, otel_provider) = match config.otlp_endpoint.as_deref() {
        Some(endpoint) => {
            let (tracer, provider) = init_tracer(endpoint)?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(provider),
            )
        }
        None => (None, None),
    };

    let json = config.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shop_app=debug,shop_hex=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .with(telemetry)
        .init();

    tracing::info!("Starting storefront server on port {}", config.port);
    if config.otlp_endpoint.is_some() {
        tracing::info!("Exporting spans to {:?}", config.otlp_endpoint);
    }

    let gateway = StripeGateway::new(config.stripe.clone())?;

    // Connect (and migrate) the backend named by the URL scheme
    let max_connections = config.database_max_connections;
    let result = match Backend::from_url(&config.database_url)? {
        Backend::MySql => {
            tracing::info!("Using MySQL database");
            let repo = MySqlRepo::new(&config.database_url, max_connections).await?;
            serve(repo, gateway, config.port).await
        }
        Backend::Sqlite => {
            tracing::info!("Using SQLite database: {}", config.database_url);
            let repo = SqliteRepo::with_max_connections(&config.database_url, max_connections).await?;
            serve(repo, gateway, config.port).await
        }
    };

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        let _ = provider.shutdown();
    }
    result
}
