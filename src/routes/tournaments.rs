use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Tournament, TournamentResponse, TournamentsResponse};
use super::parse_id;

const NO_TOURNAMENT: &str = "No Tournament Found!";

fn non_empty(tournaments: Vec<Tournament>) -> Result<Json<TournamentsResponse>, ApiError> {
    if tournaments.is_empty() {
        return Err(ApiError::NotFound(NO_TOURNAMENT));
    }

    Ok(Json(TournamentsResponse { tournaments }))
}

// GET /tournaments - List all tournaments
pub async fn get_tournaments(
    State(pool): State<SqlitePool>,
) -> Result<Json<TournamentsResponse>, ApiError> {
    let tournaments = db::get_all_tournaments(&pool).await?;
    non_empty(tournaments)
}

// GET /tournaments/details/:tournamentId - Get tournament by ID
pub async fn get_tournament_by_id(
    State(pool): State<SqlitePool>,
    Path(tournament_id): Path<String>,
) -> Result<Json<TournamentResponse>, ApiError> {
    let tournament_id = parse_id(&tournament_id, "Tournament")?;

    let tournament = db::get_tournament_by_id(&pool, tournament_id)
        .await?
        .ok_or(ApiError::NotFound(NO_TOURNAMENT))?;

    Ok(Json(TournamentResponse { tournament }))
}

// GET /tournaments/game/:gameId - Tournaments held for one game
pub async fn get_tournaments_by_game_id(
    State(pool): State<SqlitePool>,
    Path(game_id): Path<String>,
) -> Result<Json<TournamentsResponse>, ApiError> {
    let game_id = parse_id(&game_id, "Game")?;

    let tournaments = db::get_tournaments_by_game_id(&pool, game_id).await?;
    non_empty(tournaments)
}

// GET /tournaments/sort-by-prize-pool - Smallest prize pool first
pub async fn get_tournaments_sorted_by_prize_pool(
    State(pool): State<SqlitePool>,
) -> Result<Json<TournamentsResponse>, ApiError> {
    let tournaments = db::get_tournaments_sorted_by_prize_pool(&pool).await?;
    non_empty(tournaments)
}
