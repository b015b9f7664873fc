use serde::Serialize;
use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, FromRow, Row, TypeInfo, ValueRef};

/// One row exactly as the store holds it: every selected column, in select
/// order, keyed by its column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Record {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let mut fields = Map::with_capacity(row.len());
        for column in row.columns() {
            let value = column_value(row, column.ordinal())?;
            fields.insert(column.name().to_string(), value);
        }
        Ok(Record(fields))
    }
}

/// Map one column by the storage class of its value, not by the declared
/// column type: a `NUMERIC` column may hold INTEGER in one row and REAL in the
/// next.
fn column_value(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let value = match raw.type_info().name() {
        "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
        "REAL" => real(row.try_get::<f64, _>(index)?),
        "TEXT" => Value::from(row.try_get::<String, _>(index)?),
        "BLOB" => Value::from(row.try_get::<Vec<u8>, _>(index)?),
        _ => {
            if let Ok(n) = row.try_get::<i64, _>(index) {
                Value::from(n)
            } else if let Ok(n) = row.try_get::<f64, _>(index) {
                real(n)
            } else {
                Value::from(row.try_get::<String, _>(index)?)
            }
        }
    };

    Ok(value)
}

// JSON has no NaN or infinity
fn real(n: f64) -> Value {
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}

macro_rules! entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub Record);

        impl<'r> FromRow<'r, SqliteRow> for $name {
            fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
                Record::from_row(row).map($name)
            }
        }

        impl std::ops::Deref for $name {
            type Target = Record;

            fn deref(&self) -> &Record {
                &self.0
            }
        }
    };
}

entity!(
    /// Row from the `games` table (`id`, `title`, `genre`, `platform`, `rating`)
    Game
);
entity!(
    /// Row from the `players` table (`id`, `name`, `platform`, `rating`, ...)
    Player
);
entity!(
    /// Row from the `tournaments` table (`id`, `gameId`, `prizePool`, ...)
    Tournament
);

// Response envelopes

#[derive(Debug, Serialize)]
pub struct GamesResponse {
    pub games: Vec<Game>,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub game: Game,
}

#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub player: Player,
}

#[derive(Debug, Serialize)]
pub struct TournamentsResponse {
    pub tournaments: Vec<Tournament>,
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub tournament: Tournament,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn select_one(sql: &str) -> Record {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query_as::<_, Record>(sql).fetch_one(&pool).await.unwrap()
    }

    #[tokio::test]
    async fn values_follow_storage_class() {
        let record = select_one("SELECT 7 AS i, 2.5 AS r, 'x' AS t, NULL AS n, x'0102' AS b").await;

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "i": 7, "r": 2.5, "t": "x", "n": null, "b": [1, 2] })
        );
    }

    #[tokio::test]
    async fn columns_keep_select_order() {
        let record = select_one("SELECT 1 AS zeta, 2 AS alpha, 3 AS mid").await;

        assert_eq!(record.columns().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[tokio::test]
    async fn entity_serializes_as_its_record() {
        let game = Game(select_one("SELECT 1 AS id, 'A' AS title").await);

        assert_eq!(serde_json::to_string(&game).unwrap(), r#"{"id":1,"title":"A"}"#);
        assert_eq!(game.get("title"), Some(&json!("A")));
    }
}
