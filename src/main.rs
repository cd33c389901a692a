use std::net::{Ipv4Addr, SocketAddr};

use tracing_subscriber::EnvFilter;

use reading_server::config::AppConfig;
use reading_server::database::client::{Database, DbConfig};
use reading_server::init;
use reading_server::middleware::error::AppResult;
use reading_server::middleware::mw_ctx;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db = Database::connect(DbConfig {
        url: &config.db_url,
        database: &config.db_database,
        namespace: &config.db_namespace,
        username: config.db_username.as_deref(),
        password: config.db_password.as_deref(),
    })
    .await;

    init::run_migrations(&db).await?;

    let ctx_state = mw_ctx::create_ctx_state(db, &config);

    init::create_default_data_for_dev(&ctx_state).await?;

    let routes_all = init::main_router(&ctx_state);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    println!("->> LISTENING on {addr}\n");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, routes_all.into_make_service())
        .await
        .expect("Server error");

    Ok(())
}
