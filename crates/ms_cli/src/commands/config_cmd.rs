use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use super::Session;
use crate::config::SolverConfig;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Overwrite the config file with the defaults
    #[arg(long)]
    pub restore: bool,
}

pub fn run(args: ConfigArgs, session: &Session) -> Result<ExitCode> {
    let path = &session.config_path;

    if args.restore {
        SolverConfig::restore_at(path)
            .with_context(|| format!("Failed to restore {}", path.display()))?;
        println!("Restored defaults in {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    println!("# {}", path.display());
    print!("{}", session.config.to_toml()?);
    Ok(ExitCode::SUCCESS)
}
