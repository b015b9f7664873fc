//! Read-only REST API over the gaming community dataset: games, players and
//! tournaments stored in SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const WELCOME: &str = "Welcome to Gaming Community Platform!";

/// Build the application router around an already opened store.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { WELCOME }))
        .route("/health", get(routes::health::health_check))

        // Game endpoints
        .route("/games", get(routes::games::get_games))
        .route("/games/details/{id}", get(routes::games::get_game_by_id))
        .route("/games/genre/{genre}", get(routes::games::get_games_by_genre))
        .route("/games/platform/{platform}", get(routes::games::get_games_by_platform))
        .route("/games/sort-by-rating", get(routes::games::get_games_sorted_by_rating))

        // Player endpoints
        .route("/players", get(routes::players::get_players))
        .route("/players/details/{playerId}", get(routes::players::get_player_by_id))
        .route("/players/platform/{platform}", get(routes::players::get_players_by_platform))
        .route("/players/sort-by-rating", get(routes::players::get_players_sorted_by_rating))

        // Tournament endpoints
        .route("/tournaments", get(routes::tournaments::get_tournaments))
        .route("/tournaments/details/{tournamentId}", get(routes::tournaments::get_tournament_by_id))
        .route("/tournaments/game/{gameId}", get(routes::tournaments::get_tournaments_by_game_id))
        .route("/tournaments/sort-by-prize-pool", get(routes::tournaments::get_tournaments_sorted_by_prize_pool))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
