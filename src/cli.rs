use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config;
use crate::model::issue::IssueColumns;
use crate::sheet::Sheet;
use crate::submit;
use crate::tracker::gitlab::GitLabTracker;

/// Generate GitLab issues from an Excel worksheet.
#[derive(Parser, Debug)]
#[command(name = "sheetlab", version, about)]
pub struct Cli {
    /// Path to the input XLS/XLSX file
    #[arg(long, value_name = "PATH")]
    pub xls: PathBuf,

    /// Name of the worksheet to read
    #[arg(long, value_name = "NAME")]
    pub sheet: String,

    /// List the worksheet's columns and exit
    #[arg(long)]
    pub list: bool,

    /// Column that supplies the issue title
    #[arg(long = "gitlab-issue-label", value_name = "COLUMN")]
    pub issue_label: String,

    /// Column that supplies the issue labels
    #[arg(long = "gitlab-issue-tag", value_name = "COLUMN")]
    pub issue_tag: Option<String>,

    /// Column that supplies the issue due date
    #[arg(long = "gitlab-issue-due", value_name = "COLUMN")]
    pub issue_due: Option<String>,

    /// Column that supplies the issue description
    #[arg(long = "gitlab-issue-description", value_name = "COLUMN")]
    pub issue_description: Option<String>,

    /// Print generated issues without submitting them to GitLab
    #[arg(long = "gitlab-dryrun")]
    pub dryrun: bool,

    /// Custom label applied to every generated issue (repeatable)
    #[arg(long = "gitlab-tag", value_name = "LABEL")]
    pub custom_tags: Vec<String>,
}

pub async fn run(cli: Cli) -> Result<()> {
    let sheet = Sheet::open(&cli.xls, &cli.sheet)?;

    if cli.list {
        submit::print_columns(&sheet);
        return Ok(());
    }

    let columns = IssueColumns {
        label: cli.issue_label,
        tag: cli.issue_tag,
        due: cli.issue_due,
        description: cli.issue_description,
    };

    if cli.dryrun {
        return submit::preview_issues(&sheet, &columns, &cli.custom_tags);
    }

    let config = config::load_config()?;
    let tracker = GitLabTracker::new(&config);
    submit::create_issues(&sheet, &tracker, &config, &columns, &cli.custom_tags).await
}
