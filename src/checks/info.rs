use clap::Args;

use super::error::Result;
use crate::git;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct InfoArgs {}

pub fn run(_args: &InfoArgs) -> anyhow::Result<()> {
    run_inner()?;
    Ok(())
}

fn run_inner() -> Result<()> {
    let info = git::resolve()?;

    println!("url: {}", info.api_url);
    println!("branch: {}", info.branch);

    Ok(())
}
