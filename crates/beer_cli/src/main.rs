//! Command-line front end for the beer catalog.
//!
//! # Responsibility
//! - Own the connection lifetime and hand it to the core service.
//! - Print results as JSON on stdout; errors go to stderr with a non-zero exit.
//!
//! # Usage
//!
//! ```bash
//! beer --db beers.sqlite3 store --id 1 --name Heineken --type lager --style pale
//! beer get 1
//! beer list
//! ```

use anyhow::Context;
use beer_core::db::open_db;
use beer_core::{
    default_log_level, init_logging, Beer, BeerId, BeerService, BeerStyle, BeerType,
    SqliteBeerRepository,
};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "beer", version, about = "Manage the beer catalog")]
struct Cli {
    /// SQLite database file; created when missing.
    #[arg(long, env = "BEER_DB", default_value = "beer.sqlite3")]
    db: PathBuf,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "BEER_LOG_LEVEL", default_value = default_log_level())]
    log_level: String,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "BEER_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every stored beer.
    List,
    /// Show one beer.
    Get { id: BeerId },
    /// Insert a new beer with a caller-chosen id.
    Store(BeerArgs),
    /// Overwrite name, type and style of an existing beer.
    Update(BeerArgs),
    /// Delete a beer.
    Remove { id: BeerId },
    /// List the accepted beer types.
    Types,
    /// List the accepted beer styles.
    Styles,
}

#[derive(Args, Debug)]
struct BeerArgs {
    #[arg(long)]
    id: BeerId,
    #[arg(long)]
    name: String,
    #[arg(long = "type")]
    kind: BeerType,
    #[arg(long)]
    style: BeerStyle,
}

impl From<BeerArgs> for Beer {
    fn from(args: BeerArgs) -> Self {
        Beer::new(args.id, args.name, args.kind, args.style)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir).context("failed to initialize logging")?;
    }

    match cli.command {
        Command::Types => {
            let labels: Vec<_> = BeerType::ALL.iter().map(|kind| kind.label()).collect();
            println!("{}", serde_json::to_string_pretty(&labels)?);
            return Ok(());
        }
        Command::Styles => {
            let labels: Vec<_> = BeerStyle::ALL.iter().map(|style| style.label()).collect();
            println!("{}", serde_json::to_string_pretty(&labels)?);
            return Ok(());
        }
        _ => {}
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let service = BeerService::new(SqliteBeerRepository::try_new(&conn)?);
    info!("event=cli_command module=cli status=start command={:?}", cli.command);

    match cli.command {
        Command::List => {
            let beers = service.list_beers()?;
            println!("{}", serde_json::to_string_pretty(&beers)?);
        }
        Command::Get { id } => {
            let beer = service.get_beer(id)?;
            println!("{}", serde_json::to_string_pretty(&beer)?);
        }
        Command::Store(args) => {
            let beer = Beer::from(args);
            service
                .store_beer(&beer)
                .with_context(|| format!("failed to store beer {}", beer.id))?;
            println!("{}", serde_json::to_string_pretty(&beer)?);
        }
        Command::Update(args) => {
            let beer = Beer::from(args);
            service
                .update_beer(&beer)
                .with_context(|| format!("failed to update beer {}", beer.id))?;
            println!("{}", serde_json::to_string_pretty(&beer)?);
        }
        Command::Remove { id } => {
            service
                .remove_beer(id)
                .with_context(|| format!("failed to remove beer {id}"))?;
        }
        Command::Types | Command::Styles => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use beer_core::{BeerStyle, BeerType};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn store_arguments_parse_enum_labels() {
        let cli = Cli::try_parse_from([
            "beer", "--db", "/tmp/x.sqlite3", "store", "--id", "1", "--name", "Heineken",
            "--type", "LAGER", "--style", "pale",
        ])
        .unwrap();

        match cli.command {
            Command::Store(args) => {
                assert_eq!(args.id, 1);
                assert_eq!(args.kind, BeerType::Lager);
                assert_eq!(args.style, BeerStyle::Pale);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_style_is_rejected() {
        let result = Cli::try_parse_from([
            "beer", "store", "--id", "1", "--name", "x", "--type", "ale", "--style", "smoky",
        ]);
        assert!(result.is_err());
    }
}
