use anyhow::Result;
use chembal::{solve_reaction_with, BalanceConfig, Balancer};

use super::open_source;
use crate::cli::SolveArgs;

pub fn run_solve(args: SolveArgs, config: BalanceConfig) -> Result<()> {
    let source = open_source(&args.structures)?;
    let report = solve_reaction_with(&Balancer::with_config(config), &args.equation, &source)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
