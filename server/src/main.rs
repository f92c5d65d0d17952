mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let state = state::AppState::new(&config).expect("backend client init failed");

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, backend = %config.backend_url, "chapterchat listening");
    axum::serve(listener, app).await.expect("server failed");
}
