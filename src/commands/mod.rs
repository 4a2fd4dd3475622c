pub mod check;
pub mod init;
pub mod seed;
pub mod teams;

use serde::Serialize;
use tracing::info;
use url::Url;

use crate::client::RestClient;
use crate::config::{self, Config};
use crate::error::Result;
use crate::output;
use crate::probe::{self, TableState};

/// Read the configured table and classify the response.
async fn probe_table(client: &RestClient, config: &Config) -> Result<TableState> {
    let response = client.get(config.table()).await?;
    let state = probe::classify(response.status, &response.body)?;
    info!(
        table = config.table(),
        status = response.status.as_u16(),
        missing = matches!(state, TableState::Missing),
        "probed table"
    );
    Ok(state)
}

/// Result of a probe as printed in JSON mode.
#[derive(Serialize)]
struct ProbeReport<'a> {
    table: &'a str,
    exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sql_editor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migration_file: Option<&'a str>,
}

fn report_missing(base_url: &Url, config: &Config) {
    let report = ProbeReport {
        table: config.table(),
        exists: false,
        status: None,
        count: None,
        sql_editor: sql_editor_url(base_url),
        migration_file: Some(config.migration_file()),
    };

    output::print_item(&report, |_| {
        for line in migration_guidance(base_url, config.table(), config.migration_file()) {
            println!("{line}");
        }
    });
}

fn report_present(config: &Config, status: u16, count: usize) {
    let report = ProbeReport {
        table: config.table(),
        exists: true,
        status: Some(status),
        count: Some(count),
        sql_editor: None,
        migration_file: None,
    };

    output::print_item(&report, |report| {
        output::print_message(&format!(
            "Table '{}' exists! Response: {}",
            report.table, status
        ));
        output::print_message(&format!("Found {count} teams"));
    });
}

/// Dashboard SQL editor for a hosted project.
pub fn sql_editor_url(base_url: &Url) -> Option<String> {
    config::project_ref(base_url)
        .map(|project| format!("https://supabase.com/dashboard/project/{project}/sql/new"))
}

/// Instructions for creating the table by hand.
pub fn migration_guidance(base_url: &Url, table: &str, migration_file: &str) -> Vec<String> {
    let mut lines = vec![
        output::warning(&format!("Table '{table}' doesn't exist.")),
        "Tables need to be created via the Supabase SQL editor".to_string(),
    ];

    match sql_editor_url(base_url) {
        Some(editor) => lines.push(format!("Please go to: {editor}")),
        None => lines.push(format!(
            "Please open the SQL editor of the Supabase Studio serving {base_url}"
        )),
    }
    lines.push(format!("And run the SQL from: {migration_file}"));

    lines
}
