pub mod gitlab;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::model::issue::IssuePayload;

/// A project resolved on the remote tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u64,
    pub path_with_namespace: String,
}

/// The tracker's representation of a created issue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub iid: u64,
    #[serde(default)]
    pub web_url: Option<String>,
}

#[async_trait]
pub trait IssueTracker: Send + Sync {
    async fn resolve_project(&self, project_id: &str) -> Result<Project>;
    async fn create_issue(&self, project: &Project, payload: &IssuePayload)
        -> Result<CreatedIssue>;
}
