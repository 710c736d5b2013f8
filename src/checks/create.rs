use clap::Args;

use super::error::Result;
use crate::git;
use crate::github::{ChecksClient, Credentials};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct CreateArgs {
    /// Name of the check run
    pub name: String,

    /// Branch the check was run on
    pub branch: String,

    /// Commit SHA the check run is attached to
    pub sha: String,
}

#[tokio::main]
pub async fn run(args: &CreateArgs) -> anyhow::Result<()> {
    run_inner(args).await?;
    Ok(())
}

async fn run_inner(args: &CreateArgs) -> Result<()> {
    let info = git::resolve()?;
    let client = ChecksClient::new(info, Credentials::from_env());

    let check_run = client.create(&args.name, &args.branch, &args.sha).await?;

    println!(
        "Created check run [{}] `{}` for {} ({}/{})",
        check_run.id,
        check_run.name,
        check_run.head_sha,
        check_run.status,
        check_run.conclusion.as_deref().unwrap_or("-"),
    );
    if let Some(url) = &check_run.html_url {
        println!("{url}");
    }

    Ok(())
}
