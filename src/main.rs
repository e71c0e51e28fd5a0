//! pitchdesk - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pitchdesk::cli::{Cli, ColumnCommands, Commands, ConfigCommands, PitchCommands};

/// Log to stderr so tables on stdout stay clean. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Results {
            file,
            filters,
            sort,
            page,
            all,
        } => commands::results::handle(commands::results::ResultsArgs {
            file: &file,
            facets: filters.to_facets(),
            sort,
            page,
            all,
        }),
        Commands::Export { file, filters, out } => {
            commands::export::handle(&file, filters.to_facets(), out)
        }
        Commands::Columns(cmd) => match cmd {
            ColumnCommands::List => commands::columns::handle_list(),
            ColumnCommands::Add { key } => commands::columns::handle_toggle(&key, true),
            ColumnCommands::Remove { key } => commands::columns::handle_toggle(&key, false),
            ColumnCommands::Reset => commands::columns::handle_reset(),
        },
        Commands::Pitch(cmd) => match cmd {
            PitchCommands::Add {
                file,
                ids,
                all,
                filters,
            } => commands::pitch::handle_add(&file, &ids, all, filters.to_facets()),
            PitchCommands::List => commands::pitch::handle_list(),
            PitchCommands::Remove { id } => commands::pitch::handle_remove(&id),
            PitchCommands::Clear { yes } => commands::pitch::handle_clear(yes),
            PitchCommands::Lookup => commands::pitch::handle_lookup(),
            PitchCommands::Export { out } => commands::pitch::handle_export(out),
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Status => commands::status::handle(),
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
