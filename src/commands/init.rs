use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{Result, SeedError};

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("teamseed Configuration");
    println!("======================\n");

    let url = prompt("Enter your project URL (e.g., https://<ref>.supabase.co): ")?;
    if url.is_empty() {
        return Err(SeedError::MissingUrl);
    }

    let service_role_key =
        prompt("Enter your service role key (Project Settings > API > service_role): ")?;
    if service_role_key.is_empty() {
        return Err(SeedError::MissingServiceKey);
    }

    let table = prompt("Enter table name [teams]: ")?;

    save_config(&config_path, &render_config(&url, &service_role_key, &table))?;

    println!("\nConfig saved to {}", config_path.display());
    println!("The service role key bypasses row level security, keep this file private.");
    println!("You can now run 'teamseed check'!");

    Ok(())
}

fn save_config(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| SeedError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, contents).map_err(write_error)
}

fn render_config(url: &str, service_role_key: &str, table: &str) -> String {
    let mut content = format!(
        "url = {}\nservice_role_key = {}\n",
        toml_string(url),
        toml_string(service_role_key)
    );
    if !table.is_empty() {
        content.push_str(&format!("table = {}\n", toml_string(table)));
    }
    content
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
