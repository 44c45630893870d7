use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::sheet::{Row, SheetError};

/// Which worksheet columns feed each issue field. Only the title column is
/// required.
#[derive(Debug, Clone)]
pub struct IssueColumns {
    pub label: String,
    pub tag: Option<String>,
    pub due: Option<String>,
    pub description: Option<String>,
}

/// The create-issue request body. Optional fields are omitted from the
/// serialized form when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuePayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IssuePayload {
    /// Build the payload for one worksheet row. Empty cells are treated as
    /// absent, so optional fields are dropped rather than sent empty, and
    /// custom tags never pick up a leading comma.
    pub fn from_row(
        row: &Row<'_>,
        columns: &IssueColumns,
        custom_tags: &[String],
    ) -> Result<IssuePayload> {
        let title = match row.get(&columns.label)? {
            Some(value) => value.to_string(),
            None => bail!("column '{}' has no value for this row", columns.label),
        };

        let mut labels = lookup(row, columns.tag.as_deref())?;
        if !custom_tags.is_empty() {
            let joined = custom_tags.join(",");
            labels = Some(match labels {
                Some(existing) => format!("{existing},{joined}"),
                None => joined,
            });
        }

        Ok(IssuePayload {
            title,
            labels,
            due_date: lookup(row, columns.due.as_deref())?,
            description: lookup(row, columns.description.as_deref())?,
        })
    }
}

fn lookup(row: &Row<'_>, column: Option<&str>) -> Result<Option<String>, SheetError> {
    match column {
        Some(name) => Ok(row.get(name)?.map(str::to_string)),
        None => Ok(None),
    }
}
