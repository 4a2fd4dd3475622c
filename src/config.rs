use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{Result, SeedError};

pub const URL_ENV: &str = "SUPABASE_URL";
pub const SERVICE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";

pub const DEFAULT_TABLE: &str = "teams";
pub const DEFAULT_MIGRATION_FILE: &str =
    "supabase/migrations/20250928225454_express_basketball_tables.sql";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const HOSTED_SUFFIX: &str = ".supabase.co";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub url: Option<String>,
    pub service_role_key: Option<String>,
    pub table: Option<String>,
    pub migration_file: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| SeedError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&config_path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| SeedError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "teamseed")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(SeedError::NoConfigDir)
    }

    /// Project base URL, env var taking precedence over config file
    pub fn url(&self) -> Result<Url> {
        let raw = pick(std::env::var(URL_ENV).ok(), self.url.as_deref())
            .ok_or(SeedError::MissingUrl)?;
        parse_base_url(&raw)
    }

    /// Service role key, env var taking precedence over config file
    pub fn service_role_key(&self) -> Result<String> {
        pick(
            std::env::var(SERVICE_KEY_ENV).ok(),
            self.service_role_key.as_deref(),
        )
        .ok_or(SeedError::MissingServiceKey)
    }

    pub fn table(&self) -> &str {
        self.table.as_deref().unwrap_or(DEFAULT_TABLE)
    }

    pub fn migration_file(&self) -> &str {
        self.migration_file
            .as_deref()
            .unwrap_or(DEFAULT_MIGRATION_FILE)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Prefer a non-blank env value, then a non-blank file value.
fn pick(env: Option<String>, file: Option<&str>) -> Option<String> {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| file.filter(|v| !v.trim().is_empty()).map(String::from))
        .map(|v| v.trim().to_string())
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|_| SeedError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(SeedError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

/// Hosted project ref: the subdomain of `<ref>.supabase.co`.
pub fn project_ref(url: &Url) -> Option<&str> {
    let host = url.host_str()?;
    let project = host.strip_suffix(HOSTED_SUFFIX)?;
    if project.is_empty() || project.contains('.') {
        return None;
    }
    Some(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_prefers_env() {
        assert_eq!(
            pick(Some("from-env".into()), Some("from-file")),
            Some("from-env".to_string())
        );
    }

    #[test]
    fn test_pick_falls_back_on_blank_env() {
        assert_eq!(
            pick(Some("  ".into()), Some("from-file")),
            Some("from-file".to_string())
        );
        assert_eq!(pick(None, Some("")), None);
    }

    #[test]
    fn test_parse_config_file() {
        let config = Config::parse(
            Path::new("config.toml"),
            r#"
url = "https://abc.supabase.co"
service_role_key = "secret"
timeout_secs = 5
"#,
        )
        .unwrap();

        assert_eq!(config.url.as_deref(), Some("https://abc.supabase.co"));
        assert_eq!(config.service_role_key.as_deref(), Some("secret"));
        assert_eq!(config.table(), DEFAULT_TABLE);
        assert_eq!(config.migration_file(), DEFAULT_MIGRATION_FILE);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_config_file_invalid() {
        let err = Config::parse(Path::new("config.toml"), "url = [").unwrap_err();
        assert!(matches!(err, SeedError::ConfigParse { .. }));
    }

    #[test]
    fn test_parse_base_url() {
        assert!(parse_base_url("https://abc.supabase.co").is_ok());
        assert!(parse_base_url("http://127.0.0.1:54321").is_ok());
        assert!(matches!(
            parse_base_url("not a url"),
            Err(SeedError::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_base_url("ftp://abc.supabase.co"),
            Err(SeedError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_project_ref() {
        let hosted = Url::parse("https://scpluslhcastrobigkfb.supabase.co").unwrap();
        assert_eq!(project_ref(&hosted), Some("scpluslhcastrobigkfb"));

        let local = Url::parse("http://127.0.0.1:54321").unwrap();
        assert_eq!(project_ref(&local), None);

        let nested = Url::parse("https://a.b.supabase.co").unwrap();
        assert_eq!(project_ref(&nested), None);
    }
}
