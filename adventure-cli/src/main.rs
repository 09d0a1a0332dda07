use adventure_cli::application::{list_categories, print_schema, suggest, SuggestOptions};
use adventure_cli::{CatalogSource, Cli, Commands, Result};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = cli.log_config().init() {
        eprintln!("{}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Suggest {
            location,
            time,
            interests,
            seed,
            json,
        } => {
            let catalog = CatalogSource::from_option(cli.catalog).load()?;
            let options = SuggestOptions {
                location,
                time,
                interests,
                seed,
                json,
            };
            suggest(&catalog, &options, &mut stdout)?;
        }
        Commands::Categories { json } => {
            let catalog = CatalogSource::from_option(cli.catalog).load()?;
            list_categories(&catalog, json, &mut stdout)?;
        }
        Commands::Schema { target } => {
            print_schema(target, &mut stdout)?;
        }
    }

    Ok(())
}
