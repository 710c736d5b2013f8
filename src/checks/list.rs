use clap::Args;

use super::error::Result;
use crate::git;
use crate::github::{CheckRun, CheckRunList, ChecksClient, Credentials};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// Commit SHA to list check runs for
    pub commit_hash: String,
}

#[tokio::main]
pub async fn run(args: &ListArgs) -> anyhow::Result<()> {
    run_inner(args).await?;
    Ok(())
}

async fn run_inner(args: &ListArgs) -> Result<()> {
    let info = git::resolve()?;
    let client = ChecksClient::new(info, Credentials::from_env());

    let list = client.list(&args.commit_hash).await?;

    if list.check_runs.is_empty() {
        println!("No check runs found for {}.", args.commit_hash);
        return Ok(());
    }

    println!("{} check run(s) for {}:", list.total_count, args.commit_hash);
    println!("{}", format_check_run_list(&list));
    Ok(())
}

/// Format a single check run for display.
/// Format: `{id:>10}  {status:<11} {conclusion:<8} {name}`
fn format_check_run_line(check_run: &CheckRun) -> String {
    format!(
        "{:>10}  {:<11} {:<8} {}",
        check_run.id,
        check_run.status,
        check_run.conclusion.as_deref().unwrap_or("-"),
        check_run.name
    )
}

/// Format a check-run collection for display, one run per line.
fn format_check_run_list(list: &CheckRunList) -> String {
    list.check_runs
        .iter()
        .map(format_check_run_line)
        .collect::<Vec<_>>()
        .join("\n")
}
