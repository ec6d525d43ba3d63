use mock_server::{Backend, EnvelopeMode};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let mode = match std::env::var("MOCK_ENVELOPE") {
        Ok(name) => EnvelopeMode::from_name(&name).unwrap_or_else(|| {
            tracing::warn!(%name, "unknown MOCK_ENVELOPE, using paginated");
            EnvelopeMode::Paginated
        }),
        Err(_) => EnvelopeMode::Paginated,
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, ?mode, "listening");
    mock_server::serve(listener, Backend::seeded(mode)).await
}
