use std::env;

use anyhow::{bail, Context, Result};

/// Connection settings for the GitLab instance, read once at startup and
/// passed by reference into the submitter.
#[derive(Debug, Clone)]
pub struct GitLabConfig {
    pub url: String,
    pub api_key: String,
    pub project_id: String,
}

/// Load GitLab settings from a local `.env` file and the process
/// environment. Only live runs call this; listing and dry runs never need
/// credentials.
pub fn load_config() -> Result<GitLabConfig> {
    dotenvy::dotenv().ok();

    Ok(GitLabConfig {
        url: require("GITLAB_URL")?,
        api_key: require("GITLAB_API_KEY")?,
        project_id: require("GITLAB_PROJECT_ID")?,
    })
}

fn require(name: &str) -> Result<String> {
    let value = env::var(name).with_context(|| format!("{name} is not set"))?;
    if value.trim().is_empty() {
        bail!("{name} is empty");
    }
    Ok(value)
}
