//! Classification of the table probe response.

use reqwest::StatusCode;

use crate::error::{Result, SeedError};
use crate::types::Team;

/// PostgREST answers `relation "public.teams" does not exist` for unknown tables.
const MISSING_RELATION_MARKER: &str = "relation";

#[derive(Debug)]
pub enum TableState {
    /// The table has not been created yet.
    Missing,
    /// The table exists; `teams` holds its current rows.
    Present { status: StatusCode, teams: Vec<Team> },
}

pub fn classify(status: StatusCode, body: &str) -> Result<TableState> {
    if status == StatusCode::NOT_FOUND || body.contains(MISSING_RELATION_MARKER) {
        return Ok(TableState::Missing);
    }

    if !status.is_success() {
        return Err(SeedError::Api {
            status: status.as_u16(),
            message: body.to_string(),
        });
    }

    let teams: Vec<Team> = serde_json::from_str(body)?;
    Ok(TableState::Present { status, teams })
}
