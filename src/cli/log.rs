//! Activity log viewer

use crate::activity::ActivityLogger;
use crate::config::{AllotPaths, Settings};
use crate::error::AllotResult;

/// Handle `allot log`
pub fn handle_log_command(
    settings: &Settings,
    paths: &AllotPaths,
    count: usize,
) -> AllotResult<()> {
    let logger = ActivityLogger::new(paths.activity_log());

    if !logger.exists() {
        println!("No activity recorded yet.");
        if !settings.activity_log_enabled {
            println!("Activity logging is disabled in {}", paths.settings_file().display());
        }
        return Ok(());
    }

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No activity recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
