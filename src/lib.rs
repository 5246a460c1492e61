//! rosterctl - Interactive Employee Database CLI
//!
//! rosterctl manages a small employee/department/role dataset in MySQL
//! through a menu-driven terminal session: three list views, three guided
//! inserts and one guided update, each a short script of prompts over
//! parameterized SQL.
//!
//! # Architecture
//! One long-lived database connection, one logical thread of control.
//! The dispatcher loops menu → action → post-action menu until quit; action
//! failures are logged and the loop continues.
//!
//! # Module Organization
//! - [`error`] - Error types and stable error codes
//! - [`config`] - Connection profile resolution
//! - [`db`] - Gateway, the `Store` seam and the fixed query library
//! - [`prompt`] - Operator interaction (menus and free-text questions)
//! - [`action`] - Main-menu actions and the dispatch loop
//! - [`output`] - Tabular and scalar result rendering

pub mod action;
pub mod config;
pub mod db;
pub mod error;
pub mod output;
pub mod prompt;

// Re-export commonly used types for convenience
pub use action::Action;
pub use db::queries::{DepartmentRow, EmployeeRow, RoleRow};
pub use db::{ConnectionConfig, Gateway, Store};
pub use error::{Result, RosterError};
pub use output::{Outcome, Tabular};
pub use prompt::{Prompter, TerminalPrompter};
