use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::{NaiveDateTime, NaiveTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("column '{0}' not found in the worksheet")]
    MissingColumn(String),
}

/// An in-memory worksheet: a header row of column names followed by data
/// rows. Every row shares the header's column set.
pub struct Sheet {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Open a workbook and load the named worksheet. The first row is the
    /// header; fully empty rows are skipped.
    pub fn open(path: &Path, name: &str) -> Result<Sheet> {
        let mut workbook: Xlsx<_> = open_workbook(path)
            .with_context(|| format!("failed to open workbook {}", path.display()))?;

        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("failed to read worksheet '{name}'"))?;

        let mut rows = range.rows();
        let columns: Vec<String> = rows
            .next()
            .map(|header| header.iter().map(cell_text).collect())
            .unwrap_or_default();

        let rows = rows
            .map(|row| row.iter().map(cell_text).collect::<Vec<String>>())
            .filter(|cells| cells.iter().any(|c| !c.is_empty()))
            .collect();

        Ok(Sheet {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in worksheet order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Data rows in worksheet order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row {
            columns: &self.columns,
            cells,
        })
    }
}

#[cfg(test)]
impl Sheet {
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Sheet {
        Sheet {
            name: "test".to_string(),
            columns,
            rows,
        }
    }
}

/// One data row, addressable by column name.
pub struct Row<'a> {
    columns: &'a [String],
    cells: &'a [String],
}

impl Row<'_> {
    /// Cell value for a named column. Empty cells read as `None`.
    pub fn get(&self, column: &str) -> Result<Option<&str>, SheetError> {
        let index = self
            .columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| SheetError::MissingColumn(column.to_string()))?;

        let value = self.cells.get(index).map(String::as_str).unwrap_or("");
        Ok((!value.is_empty()).then_some(value))
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Whole numbers print without the fractional part
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_datetime().map(format_datetime).unwrap_or_default(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

fn format_datetime(dt: NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
