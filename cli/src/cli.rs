use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use simplelog::LevelFilter;

#[derive(Parser)]
#[command(
    name = "chembal",
    about = "Balance chemical equations and estimate molecule geometry",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// TOML file with solver tolerances
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logging verbosity on stderr
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Balance an equation such as "Fe + O2 -> Fe2O3"
    #[command(visible_alias = "b")]
    Balance(BalanceArgs),

    /// Print the estimated 3D geometry of one molecule as JSON
    #[command(visible_alias = "g")]
    Geometry(GeometryArgs),

    /// Balance an equation and print the geometry of every species as JSON
    #[command(visible_alias = "s")]
    Solve(SolveArgs),
}

#[derive(Args)]
pub struct BalanceArgs {
    /// Equation with reactants and products separated by "->"
    pub equation: String,

    /// Print the balanced equation as JSON
    #[arg(long)]
    pub json: bool,
}

/// Structure data shared by commands that produce geometry.
#[derive(Args)]
pub struct StructureOptions {
    /// JSON file with a measured structure, or an object of structures keyed by formula
    #[arg(long, value_name = "FILE")]
    pub structure: Option<PathBuf>,
}

#[derive(Args)]
pub struct GeometryArgs {
    /// Molecular formula, e.g. "CH4"
    pub formula: String,

    #[command(flatten)]
    pub structures: StructureOptions,
}

#[derive(Args)]
pub struct SolveArgs {
    /// Equation with reactants and products separated by "->"
    pub equation: String,

    #[command(flatten)]
    pub structures: StructureOptions,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn balance_with_global_options() {
        let cli = Cli::try_parse_from([
            "chembal",
            "balance",
            "H2 + O2 -> H2O",
            "--json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        match cli.command {
            Command::Balance(args) => {
                assert_eq!(args.equation, "H2 + O2 -> H2O");
                assert!(args.json);
            }
            _ => panic!("expected balance"),
        }
    }

    #[test]
    fn geometry_with_structure_file() {
        let cli = Cli::try_parse_from(["chembal", "g", "CH4", "--structure", "ch4.json"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Command::Geometry(args) => {
                assert_eq!(args.formula, "CH4");
                assert_eq!(args.structures.structure, Some(PathBuf::from("ch4.json")));
            }
            _ => panic!("expected geometry"),
        }
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["chembal", "--log-level", "loud", "solve", "A -> B"]).is_err());
    }
}
