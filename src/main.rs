mod config;
mod routes;
mod seed;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let seed = match seed::load(config.seed_path.as_deref()) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!(error = %e, "seed load failed");
            std::process::exit(1);
        }
    };
    let state = state::AppState::from_seed(seed, config.user_id.clone());

    let app = routes::app(state, config.static_dir.as_deref());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "mapkeeper listening");
    axum::serve(listener, app).await.expect("server failed");
}
