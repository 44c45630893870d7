use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use super::{CreatedIssue, IssueTracker, Project};
use crate::config::GitLabConfig;
use crate::model::issue::IssuePayload;

pub struct GitLabTracker {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl GitLabTracker {
    pub fn new(config: &GitLabConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            token: config.api_key.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IssueTracker for GitLabTracker {
    async fn resolve_project(&self, project_id: &str) -> Result<Project> {
        // Numeric ids and namespace paths are both accepted; paths must be
        // percent-encoded to survive as a single path segment.
        let url = format!(
            "{}/api/v4/projects/{}",
            self.base_url,
            urlencoding::encode(project_id)
        );
        log::debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .context("GitLab project request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            bail!("GitLab returned {status} for project '{project_id}': {detail}");
        }

        resp.json()
            .await
            .context("Failed to parse GitLab project response")
    }

    async fn create_issue(
        &self,
        project: &Project,
        payload: &IssuePayload,
    ) -> Result<CreatedIssue> {
        let url = format!("{}/api/v4/projects/{}/issues", self.base_url, project.id);
        log::debug!("POST {url} title={:?}", payload.title);

        let resp = self
            .client
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await
            .context("GitLab issue request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            bail!(
                "GitLab returned {status} creating issue '{}': {detail}",
                payload.title
            );
        }

        resp.json()
            .await
            .context("Failed to parse GitLab issue response")
    }
}
