mod balance;
mod geometry;
mod solve;

use anyhow::Result;

use crate::cli::{Cli, Command, StructureOptions};
use crate::config::load_config;
use crate::source::JsonFileSource;

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Balance(args) => balance::run_balance(args, config),
        Command::Geometry(args) => geometry::run_geometry(args),
        Command::Solve(args) => solve::run_solve(args, config),
    }
}

fn open_source(options: &StructureOptions) -> Result<JsonFileSource> {
    match &options.structure {
        Some(path) => JsonFileSource::open(path),
        None => Ok(JsonFileSource::default()),
    }
}
