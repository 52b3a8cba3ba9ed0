use anyhow::Result;
use chembal::{BalanceConfig, Balancer};

use crate::cli::BalanceArgs;

pub fn run_balance(args: BalanceArgs, config: BalanceConfig) -> Result<()> {
    let balanced = Balancer::with_config(config).balance(&args.equation)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&balanced)?);
    } else {
        println!("{balanced}");
    }
    Ok(())
}
