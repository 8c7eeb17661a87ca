use app_updater::{AvailabilityResult, SyncOutcome};

/// Human-readable summary of an update run.
pub fn outcome_message(outcome: &SyncOutcome) -> String {
    let mut message = format!("Update Status: {}\n", outcome.status);

    if !outcome.updated_files.is_empty() {
        message.push_str(&format!(
            "Updated Files: {}\n",
            outcome.updated_files.join(", ")
        ));
    }

    if outcome.errors.is_empty() {
        message.push_str("No errors");
    } else {
        message.push_str("Errors:");
        for error in &outcome.errors {
            message.push_str(&format!("\n  {error}"));
        }
    }

    message
}

/// Human-readable summary of an availability check.
pub fn availability_message(result: &AvailabilityResult) -> String {
    if !result.errors.is_empty() {
        return format!("Could not check for updates:\n  {}", result.errors.join("\n  "));
    }

    match (&result.remote_version, result.update_available) {
        (Some(version), true) => format!("Update available: {version}"),
        (Some(version), false) => format!("Up to date ({version})"),
        (None, _) => "Up to date".to_owned(),
    }
}
