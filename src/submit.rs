use std::io;

use anyhow::{Context, Result};

use crate::config::GitLabConfig;
use crate::model::issue::{IssueColumns, IssuePayload};
use crate::sheet::Sheet;
use crate::tracker::IssueTracker;
use crate::util::progress;

/// Print every column of the worksheet, one per line, in sheet order.
pub fn print_columns(sheet: &Sheet) {
    println!("Columns in worksheet '{}':", sheet.name());
    for column in sheet.columns() {
        println!("{column}");
    }
}

/// Dry run: print each generated payload without contacting the tracker.
pub fn preview_issues(sheet: &Sheet, columns: &IssueColumns, custom_tags: &[String]) -> Result<()> {
    for (index, row) in sheet.rows().enumerate() {
        let payload = IssuePayload::from_row(&row, columns, custom_tags)
            .with_context(|| format!("failed to build issue for row {}", index + 1))?;
        println!("Dry run issue data:");
        println!("{}", serde_json::to_string(&payload)?);
    }
    Ok(())
}

/// Create one issue per row, in sheet order. The first remote failure
/// aborts the run; issues already created are left in place.
pub async fn create_issues(
    sheet: &Sheet,
    tracker: &dyn IssueTracker,
    config: &GitLabConfig,
    columns: &IssueColumns,
    custom_tags: &[String],
) -> Result<()> {
    let project = tracker
        .resolve_project(&config.project_id)
        .await
        .with_context(|| format!("failed to resolve project '{}'", config.project_id))?;
    log::info!(
        "resolved project {} (id {})",
        project.path_with_namespace,
        project.id
    );

    let total = sheet.row_count();
    for (index, row) in sheet.rows().enumerate() {
        let payload = IssuePayload::from_row(&row, columns, custom_tags)
            .with_context(|| format!("failed to build issue for row {}", index + 1))?;

        if index == 0 {
            println!("Generating GitLab issues:");
        }

        tracker
            .create_issue(&project, &payload)
            .await
            .with_context(|| format!("failed to create issue for row {}", index + 1))?;
        progress::draw(&mut io::stdout(), index + 1, total, "Progress:", "Complete")?;
    }

    println!();
    println!(
        "Issues list URL: {}/{}/-/issues",
        config.url.trim_end_matches('/'),
        project.path_with_namespace
    );
    Ok(())
}
