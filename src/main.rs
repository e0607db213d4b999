use matchstats::{
    build_router,
    h2h::{
        AccountResolver, H2HRepository, H2HService, InMemoryAccountResolver,
        InMemoryH2HRepository, PostgresAccountResolver, PostgresH2HRepository,
    },
    AppConfig, AppState, EventBus, H2HSyncSubscriber, Subscription,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matchstats=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        error!(error = %err, "Server exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        h2h_batch_cap = config.h2h_batch_cap,
        "Starting match stats server"
    );

    // Postgres when DATABASE_URL is set, in-memory otherwise
    let (repository, resolver): (Arc<dyn H2HRepository>, Arc<dyn AccountResolver>) =
        match &config.database_url {
            Some(database_url) => {
                let pool = sqlx::PgPool::connect(database_url).await?;
                sqlx::migrate!("./migrations").run(&pool).await?;
                info!("Using PostgreSQL stores, schema up to date");
                (
                    Arc::new(PostgresH2HRepository::new(pool.clone())),
                    Arc::new(PostgresAccountResolver::new(pool)),
                )
            }
            None => {
                info!("DATABASE_URL not set, using in-memory stores");
                (
                    Arc::new(InMemoryH2HRepository::new()),
                    Arc::new(InMemoryAccountResolver::new()),
                )
            }
        };

    let h2h_service =
        Arc::new(H2HService::new(repository, resolver).with_batch_cap(config.h2h_batch_cap));
    let event_bus = EventBus::default();

    let _h2h_subscription = Subscription::new(
        Arc::new(H2HSyncSubscriber::new(h2h_service.clone())),
        event_bus.clone(),
    )
    .start();

    let app = build_router(AppState::new(h2h_service, event_bus));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
