//! Presenter
//!
//! Turns action results into terminal text: sequences become a table
//! (columns are the projection's field names, one row per entity), scalar
//! confirmations print verbatim. Errors never reach this module; the
//! dispatcher prints their message and moves on.

use std::fmt;

use comfy_table::Table;

use crate::db::queries::{DepartmentRow, EmployeeRow, RoleRow};

/// A row type that knows its column names and can render its cells.
pub trait Tabular {
    /// Column headers, in projection order.
    const COLUMNS: &'static [&'static str];

    /// Cell values for this row, matching [`Self::COLUMNS`]. NULLs render as
    /// empty cells.
    fn cells(&self) -> Vec<String>;
}

impl Tabular for DepartmentRow {
    const COLUMNS: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Tabular for RoleRow {
    const COLUMNS: &'static [&'static str] = &["id", "title", "salary", "department"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.title.clone(), self.salary.clone(), self.department.clone()]
    }
}

impl Tabular for EmployeeRow {
    const COLUMNS: &'static [&'static str] =
        &["id", "first_name", "last_name", "title", "department", "salary", "manager"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.title.clone(),
            self.department.clone().unwrap_or_default(),
            self.salary.clone(),
            self.manager.clone().unwrap_or_default(),
        ]
    }
}

/// What an action hands back for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A result set, rendered as a table.
    Table { columns: &'static [&'static str], rows: Vec<Vec<String>> },

    /// A scalar confirmation, printed as-is.
    Message(String),
}

impl Outcome {
    /// Build a table outcome from typed rows.
    pub fn table<T: Tabular>(items: &[T]) -> Self {
        Self::Table { columns: T::COLUMNS, rows: items.iter().map(Tabular::cells).collect() }
    }

    /// Build a scalar confirmation.
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table { columns, rows } => {
                let mut table = Table::new();
                table.set_header(columns.to_vec());
                for row in rows {
                    table.add_row(row.iter());
                }
                write!(f, "{table}")
            }
            Self::Message(text) => write!(f, "{text}"),
        }
    }
}
