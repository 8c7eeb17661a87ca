use anyhow::{Result, bail};
use app_updater_github::UpdateRequest;

use super::format::availability_message;

/// Ask whether an update is available and print the answer.
pub async fn run(request: &UpdateRequest, json: bool) -> Result<()> {
    let result = app_updater_github::check_available(request).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", availability_message(&result));
    }

    if !result.errors.is_empty() {
        bail!("update check failed");
    }

    Ok(())
}
