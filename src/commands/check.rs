use crate::client::RestClient;
use crate::config::Config;
use crate::error::Result;
use crate::probe::TableState;

use super::{probe_table, report_missing, report_present};

pub async fn run(client: &RestClient, config: &Config) -> Result<()> {
    match probe_table(client, config).await? {
        TableState::Missing => report_missing(client.base_url(), config),
        TableState::Present { status, teams } => {
            report_present(config, status.as_u16(), teams.len())
        }
    }

    Ok(())
}
