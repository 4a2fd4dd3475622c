use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeedError};

/// Longest name the mobile apps accept for any free-text team field.
pub const MAX_NAME_LEN: usize = 50;

static TEAM_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{6}$").expect("valid team code regex"));
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// A row read back from the teams table.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub team_code: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Insert payload for a new team.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub team_code: String,
    pub organization: String,
    pub age_group: String,
    pub season: String,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for NewTeam {
    /// The demonstration team seeded into an empty table.
    fn default() -> Self {
        Self {
            name: "Thunder Elite".to_string(),
            team_code: "THDR01".to_string(),
            organization: "Express Basketball Club".to_string(),
            age_group: "14U".to_string(),
            season: "2024-2025".to_string(),
            primary_color: "#007AFF".to_string(),
            secondary_color: "#FF3B30".to_string(),
        }
    }
}

impl NewTeam {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("organization", &self.organization),
            ("age_group", &self.age_group),
            ("season", &self.season),
        ] {
            if value.trim().is_empty() {
                return Err(SeedError::InvalidTeam(format!("{field} is required")));
            }
            if value.chars().count() > MAX_NAME_LEN {
                return Err(SeedError::InvalidTeam(format!(
                    "{field} cannot exceed {MAX_NAME_LEN} characters"
                )));
            }
        }

        if !TEAM_CODE_RE.is_match(&self.team_code) {
            return Err(SeedError::InvalidTeam(format!(
                "team_code must be 6 uppercase letters or digits, got {:?}",
                self.team_code
            )));
        }

        for (field, value) in [
            ("primary_color", &self.primary_color),
            ("secondary_color", &self.secondary_color),
        ] {
            if !HEX_COLOR_RE.is_match(value) {
                return Err(SeedError::InvalidTeam(format!(
                    "{field} must be a #RRGGBB hex color, got {value:?}"
                )));
            }
        }

        Ok(())
    }
}
