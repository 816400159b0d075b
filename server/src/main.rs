mod db;
mod routes;
mod services;
mod state;

use crate::services::token::JwtKeys;

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let jwt = JwtKeys::from_env();
    let state = state::AppState::new(pool, jwt);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "pc parts shop listening");
    axum::serve(listener, app).await.expect("server failed");
}
