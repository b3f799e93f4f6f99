use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use adspace_server::{Config, Error};

#[actix_web::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    let config = Config::load()?;

    adspace_server::run(config).await
}
