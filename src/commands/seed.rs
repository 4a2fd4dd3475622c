use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::SeedArgs;
use crate::client::RestClient;
use crate::config::Config;
use crate::error::{Result, SeedError};
use crate::output;
use crate::probe::TableState;
use crate::types::NewTeam;

use super::{migration_guidance, probe_table, sql_editor_url};

/// Everything one seed run did, printed as a single JSON object in JSON mode.
#[derive(Serialize, Debug)]
pub struct SeedReport {
    pub table: String,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub inserted: bool,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<NewTeam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_editor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_file: Option<String>,
    #[serde(skip)]
    failure: Option<String>,
}

impl SeedReport {
    fn new(config: &Config, dry_run: bool) -> Self {
        Self {
            table: config.table().to_string(),
            exists: false,
            status: None,
            count: None,
            inserted: false,
            dry_run,
            team: None,
            insert_status: None,
            sql_editor: None,
            migration_file: None,
            failure: None,
        }
    }

    /// A rejected insert becomes `InsertFailed` carrying the response body.
    pub fn into_result(self) -> Result<()> {
        match (self.failure, self.insert_status) {
            (Some(message), Some(status)) => Err(SeedError::InsertFailed { status, message }),
            _ => Ok(()),
        }
    }
}

pub async fn run(client: &RestClient, config: &Config, args: SeedArgs) -> Result<()> {
    let report = execute(client, config, &args).await?;

    output::print_item(&report, |report| print_report(report, client, config));

    report.into_result()
}

/// Probe the table and insert the team when it is empty.
pub async fn execute(
    client: &RestClient,
    config: &Config,
    args: &SeedArgs,
) -> Result<SeedReport> {
    let team = args.team();
    team.validate()?;

    let mut report = SeedReport::new(config, args.dry_run);

    let (status, existing) = match probe_table(client, config).await? {
        TableState::Missing => {
            report.sql_editor = sql_editor_url(client.base_url());
            report.migration_file = Some(config.migration_file().to_string());
            return Ok(report);
        }
        TableState::Present { status, teams } => (status, teams.len()),
    };

    report.exists = true;
    report.status = Some(status.as_u16());
    report.count = Some(existing);

    if existing > 0 {
        debug!(existing, "table not empty, skipping seed");
        return Ok(report);
    }

    if args.dry_run {
        report.team = Some(team);
        return Ok(report);
    }

    let response = client.insert(config.table(), &team).await?;
    report.insert_status = Some(response.status.as_u16());
    report.team = Some(team);

    if response.status == StatusCode::CREATED {
        info!(table = %report.table, "inserted demo team");
        report.inserted = true;
    } else {
        warn!(status = response.status.as_u16(), "insert rejected");
        report.failure = Some(response.body);
    }

    Ok(report)
}

fn print_report(report: &SeedReport, client: &RestClient, config: &Config) {
    if !report.exists {
        let lines =
            migration_guidance(client.base_url(), config.table(), config.migration_file());
        for line in lines {
            println!("{line}");
        }
        return;
    }

    if let (Some(status), Some(count)) = (report.status, report.count) {
        output::print_message(&format!(
            "Table '{}' exists! Response: {status}",
            report.table
        ));
        output::print_message(&format!("Found {count} teams"));
        if count > 0 {
            output::print_message("Table already has teams, nothing to seed");
        }
    }

    if let Some(team) = report.team.as_ref().filter(|_| report.dry_run) {
        println!("Dry run, would insert:");
        print_team(team);
    }

    if report.inserted {
        output::print_message(&output::success("Demo team created successfully!"));
    }
}

fn print_team(team: &NewTeam) {
    println!("  Name:         {}", team.name);
    println!("  Code:         {}", team.team_code);
    println!("  Organization: {}", team.organization);
    println!("  Age group:    {}", team.age_group);
    println!("  Season:       {}", team.season);
    println!(
        "  Colors:       {} / {}",
        output::color_swatch(&team.primary_color),
        output::color_swatch(&team.secondary_color)
    );
}
