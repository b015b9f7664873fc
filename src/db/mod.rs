use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::config::Config;
use crate::models::*;

/// Open the store read-only. The pool is created once at startup and shared by
/// every handler.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.read_only(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

// Game queries
pub async fn get_all_games(pool: &SqlitePool) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT * FROM games"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_game_by_id(pool: &SqlitePool, game_id: i64) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT * FROM games WHERE id = ?"#
    )
    .bind(game_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_games_by_genre(pool: &SqlitePool, genre: &str) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT * FROM games WHERE genre = ?"#
    )
    .bind(genre)
    .fetch_all(pool)
    .await
}

pub async fn get_games_by_platform(pool: &SqlitePool, platform: &str) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT * FROM games WHERE platform = ?"#
    )
    .bind(platform)
    .fetch_all(pool)
    .await
}

pub async fn get_games_sorted_by_rating(pool: &SqlitePool) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT * FROM games ORDER BY rating ASC"#
    )
    .fetch_all(pool)
    .await
}

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_player_by_id(pool: &SqlitePool, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players WHERE id = ?"#
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_players_by_platform(pool: &SqlitePool, platform: &str) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players WHERE platform = ?"#
    )
    .bind(platform)
    .fetch_all(pool)
    .await
}

pub async fn get_players_sorted_by_rating(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players ORDER BY rating ASC"#
    )
    .fetch_all(pool)
    .await
}

// Tournament queries
pub async fn get_all_tournaments(pool: &SqlitePool) -> Result<Vec<Tournament>, sqlx::Error> {
    sqlx::query_as::<_, Tournament>(
        r#"SELECT * FROM tournaments"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_tournament_by_id(pool: &SqlitePool, tournament_id: i64) -> Result<Option<Tournament>, sqlx::Error> {
    sqlx::query_as::<_, Tournament>(
        r#"SELECT * FROM tournaments WHERE id = ?"#
    )
    .bind(tournament_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_tournaments_by_game_id(pool: &SqlitePool, game_id: i64) -> Result<Vec<Tournament>, sqlx::Error> {
    sqlx::query_as::<_, Tournament>(
        r#"SELECT * FROM tournaments WHERE gameId = ?"#
    )
    .bind(game_id)
    .fetch_all(pool)
    .await
}

pub async fn get_tournaments_sorted_by_prize_pool(pool: &SqlitePool) -> Result<Vec<Tournament>, sqlx::Error> {
    sqlx::query_as::<_, Tournament>(
        r#"SELECT * FROM tournaments ORDER BY prizePool ASC"#
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(path: &std::path::Path) -> Config {
        Config {
            database_url: format!("sqlite://{}", path.display()),
            host: std::net::Ipv4Addr::LOCALHOST,
            port: 0,
            max_connections: 1,
        }
    }

    #[tokio::test]
    async fn missing_database_file_is_an_error() {
        let path = std::env::temp_dir().join("gaming_community_api_missing.sqlite");
        let _ = std::fs::remove_file(&path);

        assert!(connect(&config_for(&path)).await.is_err());
    }

    #[tokio::test]
    async fn connection_is_read_only() {
        let path = std::env::temp_dir().join(format!("gaming_community_api_{}.sqlite", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let writer = SqlitePool::connect_with(
            SqliteConnectOptions::new().filename(&path).create_if_missing(true),
        )
        .await
        .unwrap();
        sqlx::raw_sql(
            "CREATE TABLE games (id INTEGER PRIMARY KEY, title TEXT, genre TEXT, platform TEXT, rating REAL);
             INSERT INTO games VALUES (1, 'A', 'FPS', 'PC', 4.5);",
        )
        .execute(&writer)
        .await
        .unwrap();
        writer.close().await;

        let pool = connect(&config_for(&path)).await.unwrap();
        let games = get_all_games(&pool).await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].get("title"), Some(&serde_json::json!("A")));

        let write = sqlx::query("DELETE FROM games").execute(&pool).await;
        assert!(write.is_err());

        pool.close().await;
        let _ = std::fs::remove_file(&path);
    }
}
