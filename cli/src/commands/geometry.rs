use anyhow::Result;
use chembal::geometry::generate_with;
use log::warn;

use super::open_source;
use crate::cli::GeometryArgs;

pub fn run_geometry(args: GeometryArgs) -> Result<()> {
    let source = open_source(&args.structures)?;
    let geometry = generate_with(&args.formula, &source);
    if geometry.is_empty() {
        warn!("no atoms could be placed for {}", args.formula);
    }
    println!("{}", serde_json::to_string_pretty(&geometry)?);
    Ok(())
}
