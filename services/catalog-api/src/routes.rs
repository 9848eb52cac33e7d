use axum::{Router, middleware, routing::get};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;
use crate::handlers::{create_game, delete_game, get_game, list_games, list_genres, update_game};
use crate::middleware::request_id_middleware;

pub fn create_routes(pool: SqlitePool) -> Router {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", get(get_game).put(update_game).delete(delete_game))
        .route("/genres", get(list_genres))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { pool })
}
