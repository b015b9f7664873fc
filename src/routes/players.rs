use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Player, PlayerResponse, PlayersResponse};
use super::parse_id;

const NO_PLAYERS: &str = "No Players Found!";
const NO_PLAYER: &str = "No Player Found!";

fn non_empty(players: Vec<Player>, message: &'static str) -> Result<Json<PlayersResponse>, ApiError> {
    if players.is_empty() {
        return Err(ApiError::NotFound(message));
    }

    Ok(Json(PlayersResponse { players }))
}

// GET /players - List all players
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<PlayersResponse>, ApiError> {
    let players = db::get_all_players(&pool).await?;
    non_empty(players, NO_PLAYERS)
}

// GET /players/details/:playerId - Get player by ID
pub async fn get_player_by_id(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player_id = parse_id(&player_id, "Player")?;

    let player = db::get_player_by_id(&pool, player_id)
        .await?
        .ok_or(ApiError::NotFound(NO_PLAYER))?;

    Ok(Json(PlayerResponse { player }))
}

// GET /players/platform/:platform
pub async fn get_players_by_platform(
    State(pool): State<SqlitePool>,
    Path(platform): Path<String>,
) -> Result<Json<PlayersResponse>, ApiError> {
    let players = db::get_players_by_platform(&pool, &platform).await?;
    non_empty(players, NO_PLAYER)
}

// GET /players/sort-by-rating
pub async fn get_players_sorted_by_rating(
    State(pool): State<SqlitePool>,
) -> Result<Json<PlayersResponse>, ApiError> {
    let players = db::get_players_sorted_by_rating(&pool).await?;
    non_empty(players, NO_PLAYER)
}
