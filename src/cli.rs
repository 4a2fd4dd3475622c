use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::types::NewTeam;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "teamseed")]
#[command(
    about = "Check the Supabase teams table and seed a demo team when it is empty",
    version
)]
#[command(after_help = "EXAMPLES:
    teamseed check                    Check whether the teams table exists
    teamseed seed                     Insert the demo team if the table is empty
    teamseed seed --dry-run           Show the row that would be inserted
    teamseed teams                    List teams in the table")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and request logs
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the teams table exists and count its rows
    #[command(
        alias = "c",
        after_help = "EXAMPLES:
    teamseed check
    SUPABASE_URL=http://127.0.0.1:54321 teamseed check"
    )]
    Check,
    /// Insert the demo team when the table exists and is empty
    #[command(
        alias = "s",
        after_help = "EXAMPLES:
    teamseed seed
    teamseed seed --dry-run
    teamseed seed --name \"Lightning\" --code LGHT02 --age-group 12U"
    )]
    Seed(SeedArgs),
    /// List teams
    #[command(
        alias = "t",
        after_help = "EXAMPLES:
    teamseed teams
    teamseed teams --format json"
    )]
    Teams,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    teamseed completions bash > ~/.bash_completion.d/teamseed
    teamseed completions zsh > ~/.zfunc/_teamseed
    teamseed completions fish > ~/.config/fish/completions/teamseed.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    teamseed init")]
    Init,
}

#[derive(Args, Default)]
pub struct SeedArgs {
    /// Print the row instead of inserting it
    #[arg(long)]
    pub dry_run: bool,

    /// Team name [default: Thunder Elite]
    #[arg(long)]
    pub name: Option<String>,

    /// Six character team code [default: THDR01]
    #[arg(long)]
    pub code: Option<String>,

    /// Organization [default: Express Basketball Club]
    #[arg(long)]
    pub organization: Option<String>,

    /// Age group [default: 14U]
    #[arg(long)]
    pub age_group: Option<String>,

    /// Season [default: 2024-2025]
    #[arg(long)]
    pub season: Option<String>,

    /// Primary color as #RRGGBB [default: #007AFF]
    #[arg(long)]
    pub primary_color: Option<String>,

    /// Secondary color as #RRGGBB [default: #FF3B30]
    #[arg(long)]
    pub secondary_color: Option<String>,
}

impl SeedArgs {
    /// Demo team with any command-line overrides applied
    pub fn team(&self) -> NewTeam {
        let demo = NewTeam::default();
        let pick = |arg: &Option<String>, fallback: String| arg.clone().unwrap_or(fallback);

        NewTeam {
            name: pick(&self.name, demo.name),
            team_code: pick(&self.code, demo.team_code),
            organization: pick(&self.organization, demo.organization),
            age_group: pick(&self.age_group, demo.age_group),
            season: pick(&self.season, demo.season),
            primary_color: pick(&self.primary_color, demo.primary_color),
            secondary_color: pick(&self.secondary_color, demo.secondary_color),
        }
    }
}
