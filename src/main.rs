//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fantasy_hoops::{
    cli::{Commands, Hoops},
    commands::{
        matchups::handle_matchups,
        project::{handle_project, ProjectParams},
        refresh::handle_refresh,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "info,fantasy_hoops=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Hoops::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Refresh { args } => handle_refresh(app.db, args.into_config()).await?,

        Commands::Project {
            period,
            strict,
            dry_run,
            json,
        } => handle_project(
            app.db.as_deref(),
            ProjectParams {
                season: period.season,
                week: period.week,
                strict,
                dry_run,
                as_json: json,
            },
        )?,

        Commands::Matchups { period, json } => {
            handle_matchups(app.db.as_deref(), period.season, period.week, json)?
        }
    }

    Ok(())
}
