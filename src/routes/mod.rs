pub mod games;
pub mod health;
pub mod players;
pub mod tournaments;

use crate::error::ApiError;

/// Parse a numeric path segment. `entity` names the id in the 400 message.
pub fn parse_id(raw: &str, entity: &'static str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        tracing::debug!("Rejected {} id {:?}", entity, raw);
        ApiError::InvalidId(entity)
    })
}
