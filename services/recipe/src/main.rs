use sea_orm::Database;
use tracing::info;

use ladle_recipe::config::RecipeConfig;
use ladle_recipe::router::build_router;
use ladle_recipe::state::AppState;

#[tokio::main]
async fn main() {
    ladle_core::tracing::init_tracing();

    let config = RecipeConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        media_root: config.media_root,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.recipe_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("recipe service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
