use tabled::Tabled;

use crate::client::RestClient;
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::probe::TableState;
use crate::types::Team;

use super::{probe_table, report_missing};

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age_group: String,
    #[tabled(rename = "Season")]
    season: String,
    #[tabled(rename = "Colors")]
    colors: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        let colors = [&team.primary_color, &team.secondary_color]
            .into_iter()
            .flatten()
            .map(|hex| output::color_swatch(hex))
            .collect::<Vec<_>>()
            .join("  ");

        Self {
            code: team.team_code.clone(),
            name: team.name.clone(),
            age_group: team.age_group.clone().unwrap_or_default(),
            season: team.season.clone().unwrap_or_default(),
            colors,
            created: team
                .created_at
                .as_deref()
                .map(output::format_date_only)
                .unwrap_or_default(),
        }
    }
}

fn compact_line(team: &Team) -> String {
    format!("{}\t{}", team.team_code, team.name)
}

pub async fn list(client: &RestClient, config: &Config) -> Result<()> {
    let teams = match probe_table(client, config).await? {
        TableState::Missing => {
            report_missing(client.base_url(), config);
            return Ok(());
        }
        TableState::Present { teams, .. } => teams,
    };

    if teams.is_empty() && !output::is_json_output() {
        output::print_message("No teams found");
        return Ok(());
    }

    output::print_table(&teams, |team| TeamRow::from(team), compact_line);

    Ok(())
}
