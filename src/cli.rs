//! CLI definitions for pitchdesk
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::filter::{FacetState, RangeFilter, SortKey};
use crate::results::NumericField;
use crate::tier::TierBucket;

/// Build clap styles for a consistent CLI appearance.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "pitchdesk")]
#[command(about = "[ pitchdesk ] - filter, export and pitch influencer evaluation results")]
#[command(
    long_about = "pitchdesk - Work through influencer search and evaluation results.

Results are read from JSON files produced by search or evaluate tasks.
They can be filtered by tier, country, channel type and any numeric
metric, exported to spreadsheet (CSV) files, and promoted to an outreach
list whose contact e-mails are looked up on demand.

State (column choice, outreach list) is kept in ~/.pitchdesk/.
Configuration lives in ~/.config/pitchdesk/config.toml.

QUICK START:
    pitchdesk results task.json                    Show all rows
    pitchdesk results task.json --tier Mid --cpm lt:20
    pitchdesk export task.json --country US        Export filtered rows
    pitchdesk pitch add task.json UC123 UC456      Add to outreach list
    pitchdesk pitch lookup                         Find contact e-mails"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Facet filters shared by `results` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Quality score condition
    #[arg(long, value_name = "COND", help = "Quality score: none | gt:N | lt:N | between:LO:HI")]
    pub quality: Option<RangeFilter>,

    /// Business match score condition
    #[arg(long = "match", value_name = "COND", help = "Match score condition")]
    pub match_score: Option<RangeFilter>,

    /// Average views of the last 10 videos
    #[arg(long, value_name = "COND", help = "Average views (last 10 videos) condition")]
    pub avg_views: Option<RangeFilter>,

    /// Estimated CPM condition
    #[arg(long, value_name = "COND", help = "Estimated CPM condition")]
    pub cpm: Option<RangeFilter>,

    /// Sponsored video count condition
    #[arg(long, value_name = "COND", help = "Sponsored video count condition")]
    pub sponsored_count: Option<RangeFilter>,

    /// Subscriber tiers to keep
    #[arg(long = "tier", value_name = "TIER", help = "Keep this tier (repeatable)")]
    pub tiers: Vec<TierBucket>,

    /// Country codes to keep
    #[arg(long = "country", value_name = "CODE", help = "Keep this country code (repeatable)")]
    pub countries: Vec<String>,

    /// Channel types to keep
    #[arg(long = "type", value_name = "TYPE", help = "Keep this channel type (repeatable)")]
    pub categories: Vec<String>,
}

impl FilterArgs {
    /// Turn the flags into a facet state.
    pub fn to_facets(&self) -> FacetState {
        let mut facets = FacetState::new()
            .with_tiers(self.tiers.iter().copied())
            .with_countries(self.countries.iter().cloned())
            .with_categories(self.categories.iter().cloned());

        let numeric = [
            (NumericField::QualityScore, self.quality),
            (NumericField::MatchScore, self.match_score),
            (NumericField::AvgViewsLast10, self.avg_views),
            (NumericField::EstimatedCpm, self.cpm),
            (NumericField::SponsoredCount, self.sponsored_count),
        ];
        for (field, filter) in numeric {
            if let Some(filter) = filter {
                facets.set_range(field, filter);
            }
        }
        facets
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show filtered result rows
    #[command(
        visible_alias = "ls",
        long_about = "Show the rows of a result file as a table.

Only the columns in your column profile are shown (see 'pitchdesk columns').
Search results use a fixed column set. Filters are combined with AND;
a facet without a value places no constraint.

RANGE CONDITIONS:
    none            No constraint
    gt:N            Value greater than N
    lt:N            Value less than N
    between:LO:HI   LO <= value <= HI (inactive unless both bounds are set)

EXAMPLES:
    pitchdesk results task.json
    pitchdesk results task.json --tier Micro --tier Mid+ --country US
    pitchdesk results task.json --quality between:60:80 --sort match_score:desc
    pitchdesk results task.json --page 2"
    )]
    Results {
        /// Result file (JSON)
        #[arg(help = "Path to the result JSON file")]
        file: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
        /// Sort by a numeric field
        #[arg(long, value_name = "FIELD[:asc|desc]", help = "Sort by a numeric field")]
        sort: Option<SortKey>,
        /// Page to show (1-based)
        #[arg(long, default_value_t = 1, help = "Page number, starting at 1")]
        page: usize,
        /// Print every matching row
        #[arg(long, help = "Disable paging and print every row")]
        all: bool,
    },

    /// Export filtered rows to a spreadsheet file
    #[command(long_about = "Export the filtered rows of a result file to CSV.

The export always carries the full field set, independent of the column
profile. Files are named <sheet>_<task>_<YYYY-MM-DD>.csv and written
atomically: a failed export leaves no file behind.

EXAMPLES:
    pitchdesk export task.json
    pitchdesk export task.json --tier Top --out ~/exports")]
    Export {
        /// Result file (JSON)
        #[arg(help = "Path to the result JSON file")]
        file: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
        /// Target directory (defaults to export.directory from config)
        #[arg(long, short, value_name = "DIR", help = "Directory to write into")]
        out: Option<PathBuf>,
    },

    /// Manage visible result columns
    #[command(subcommand)]
    Columns(ColumnCommands),

    /// Manage the outreach candidate list
    #[command(subcommand)]
    Pitch(PitchCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show state directory usage
    #[command(long_about = "Show where state is stored and what it holds.

EXAMPLE:
    pitchdesk status")]
    Status,

    /// Generate shell completions
    #[command(long_about = "Generate shell completion scripts.

EXAMPLES:
    pitchdesk completions --shell bash > ~/.local/share/bash-completion/completions/pitchdesk
    pitchdesk completions --shell zsh > ~/.zfunc/_pitchdesk")]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum, help = "Target shell")]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ColumnCommands {
    /// List all columns and whether they are shown
    #[command(long_about = "List every known column with its label.

Visible columns are marked with *, mandatory ones with (required).

EXAMPLE:
    pitchdesk columns list")]
    List,
    /// Show a column
    #[command(long_about = "Add a column to the profile. It is appended at the end.

EXAMPLE:
    pitchdesk columns add sponsored_video_links")]
    Add {
        /// Column key
        #[arg(help = "Column key (see 'pitchdesk columns list')")]
        key: String,
    },
    /// Hide a column
    #[command(long_about = "Remove a column from the profile.

Mandatory columns cannot be hidden; removing one has no effect.

EXAMPLE:
    pitchdesk columns remove estimated_cpm")]
    Remove {
        /// Column key
        #[arg(help = "Column key")]
        key: String,
    },
    /// Restore the default columns
    Reset,
}

#[derive(Subcommand)]
pub enum PitchCommands {
    /// Add rows from a result file to the outreach list
    #[command(long_about = "Add influencers from a result file to the outreach list.

Influencers already on the list are skipped and keep their e-mail state.

EXAMPLES:
    pitchdesk pitch add task.json UC123 UC456
    pitchdesk pitch add task.json --all --tier Mid")]
    Add {
        /// Result file (JSON)
        #[arg(help = "Path to the result JSON file")]
        file: PathBuf,
        /// Influencer ids to add
        #[arg(help = "Influencer ids", required_unless_present = "all")]
        ids: Vec<String>,
        /// Add every row that passes the filters
        #[arg(long, help = "Add every filtered row")]
        all: bool,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show the outreach list
    #[command(visible_alias = "ls")]
    List,
    /// Remove one influencer from the list
    Remove {
        /// Influencer id
        #[arg(help = "Influencer id to remove")]
        id: String,
    },
    /// Empty the outreach list
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },
    /// Look up contact e-mails for pending candidates
    #[command(long_about = "Run the e-mail lookup for every candidate that has none yet.

Candidates already found or not found are left alone. Delay and hit
rate of the lookup come from the [email_lookup] config section.

EXAMPLE:
    pitchdesk pitch lookup")]
    Lookup,
    /// Export the outreach list
    Export {
        /// Target directory (defaults to export.directory from config)
        #[arg(long, short, value_name = "DIR", help = "Directory to write into")]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

EXAMPLE:
    pitchdesk config show")]
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').
Config file location: ~/.config/pitchdesk/config.toml

EXAMPLE:
    pitchdesk config edit
    EDITOR=nano pitchdesk config edit")]
    Edit,
}
