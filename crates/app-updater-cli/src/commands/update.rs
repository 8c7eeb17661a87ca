use anyhow::{Result, bail};
use app_updater::SyncStatus;
use app_updater_github::UpdateRequest;

use super::format::outcome_message;

/// Synchronize the local directory and print the outcome.
///
/// Restarting the updated application is left to whoever launched it.
pub async fn run(request: &UpdateRequest, json: bool) -> Result<()> {
    if !json {
        println!(
            "Updating {} from {} ({})...",
            request.local_dir.display(),
            request.repo_root,
            request.branch
        );
    }

    let outcome = app_updater_github::synchronize(request).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome_message(&outcome));
    }

    if outcome.changed_files() {
        eprintln!("Restart the application to use the updated files.");
    }

    if outcome.status == SyncStatus::Failed {
        bail!("update failed");
    }

    Ok(())
}
