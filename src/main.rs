mod analysis;
mod catalog;
mod cli;
mod commands;
mod config;
mod constants;
mod display;
mod domain;
mod filter;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use filter::FilterCriteria;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            tag,
            language,
            search,
            json,
        } => commands::list::list(
            FilterCriteria {
                tag,
                language,
                search_term: search,
            },
            json,
        ),
        Commands::Show {
            name,
            count,
            all,
            json,
        } => commands::show::show(&name, count, all, json),
        Commands::Options { json } => commands::options::options(json),
        Commands::Check { json } => {
            let exit_code = commands::check::check_catalog(json)?;
            std::process::exit(exit_code);
        }
    }
}
