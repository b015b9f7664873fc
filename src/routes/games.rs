use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Game, GameResponse, GamesResponse};
use super::parse_id;

const NO_GAMES: &str = "No Games Found!";
const NO_GAME: &str = "No Game Found!";

fn non_empty(games: Vec<Game>, message: &'static str) -> Result<Json<GamesResponse>, ApiError> {
    if games.is_empty() {
        return Err(ApiError::NotFound(message));
    }

    Ok(Json(GamesResponse { games }))
}

// GET /games - List all games
pub async fn get_games(
    State(pool): State<SqlitePool>,
) -> Result<Json<GamesResponse>, ApiError> {
    let games = db::get_all_games(&pool).await?;
    non_empty(games, NO_GAMES)
}

// GET /games/details/:id - Get game by ID
pub async fn get_game_by_id(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let game_id = parse_id(&id, "Game")?;

    let game = db::get_game_by_id(&pool, game_id)
        .await?
        .ok_or(ApiError::NotFound(NO_GAME))?;

    Ok(Json(GameResponse { game }))
}

// GET /games/genre/:genre - Exact-match genre filter
pub async fn get_games_by_genre(
    State(pool): State<SqlitePool>,
    Path(genre): Path<String>,
) -> Result<Json<GamesResponse>, ApiError> {
    let games = db::get_games_by_genre(&pool, &genre).await?;
    non_empty(games, NO_GAME)
}

// GET /games/platform/:platform - Exact-match platform filter
pub async fn get_games_by_platform(
    State(pool): State<SqlitePool>,
    Path(platform): Path<String>,
) -> Result<Json<GamesResponse>, ApiError> {
    let games = db::get_games_by_platform(&pool, &platform).await?;
    non_empty(games, NO_GAME)
}

// GET /games/sort-by-rating - Lowest rating first
pub async fn get_games_sorted_by_rating(
    State(pool): State<SqlitePool>,
) -> Result<Json<GamesResponse>, ApiError> {
    let games = db::get_games_sorted_by_rating(&pool).await?;
    non_empty(games, NO_GAME)
}
