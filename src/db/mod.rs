//! Database Gateway
//!
//! The sole component issuing SQL against the external MySQL database.
//!
//! # Connection Model
//! One connection is opened at process start and lives until quit. No pool,
//! no retry, no reconnect. Every statement auto-commits individually; no
//! transaction ever spans two statements.
//!
//! # The `Store` Seam
//! The dispatcher talks to the database through the [`Store`] trait, which
//! names exactly the seven fixed operations. [`Gateway`] is the MySQL
//! implementation; tests drive the dispatcher against an in-memory one.

use std::future::Future;

use mysql_async::{prelude::Queryable, Conn, OptsBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

pub mod queries;

use queries::{DepartmentRow, EmployeeRow, RoleRow};

/// Connection parameters for the MySQL server.
///
/// WARNING: `password` is sensitive, do not log this struct or include it in
/// error messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Hostname of the MySQL server
    pub host: String,

    /// TCP port
    pub port: u16,

    /// Username
    pub user: String,

    /// Password
    pub password: String,

    /// Database (schema) name
    pub database: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "employees_db".to_string(),
        }
    }
}

/// The seven fixed operations against the employee schema.
///
/// Reads return ordered typed rows; writes return nothing and auto-commit.
/// Every failure is a [`RosterError::QueryFailed`] (or `ConnectionFailed`
/// when the link itself is gone).
pub trait Store {
    /// All departments.
    fn list_departments(&mut self) -> impl Future<Output = Result<Vec<DepartmentRow>>> + Send;

    /// All roles with their department name.
    fn list_roles(&mut self) -> impl Future<Output = Result<Vec<RoleRow>>> + Send;

    /// All employees with role, department, salary and manager name.
    /// `manager` is `None` for employees whose `manager_id` is NULL.
    fn list_employees(&mut self) -> impl Future<Output = Result<Vec<EmployeeRow>>> + Send;

    /// Insert a department.
    fn add_department(&mut self, name: &str) -> impl Future<Output = Result<()>> + Send;

    /// Insert a role under the department with the given name.
    ///
    /// `salary` is passed through as collected; numeric coercion is the
    /// database's business.
    fn add_role(
        &mut self,
        title: &str,
        salary: &str,
        department: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Insert an employee holding the role with the given title, optionally
    /// reporting to `manager_id`.
    fn add_employee(
        &mut self,
        first_name: &str,
        last_name: &str,
        role_title: &str,
        manager_id: Option<u32>,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Move the employee with `employee_id` to the role with the given title.
    fn update_employee_role(
        &mut self,
        employee_id: u32,
        role_title: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// MySQL-backed [`Store`] holding the process-wide connection.
pub struct Gateway {
    conn: Conn,
}

impl Gateway {
    /// Open the long-lived connection.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let opts = OptsBuilder::default()
            .ip_or_hostname(config.host.as_str())
            .tcp_port(config.port)
            .user(Some(config.user.as_str()))
            .pass(Some(config.password.as_str()))
            .db_name(Some(config.database.as_str()));

        let conn = Conn::new(opts).await.map_err(|e| {
            RosterError::connection_failed(format!("Failed to connect to MySQL: {e}"))
        })?;

        tracing::info!(database = %config.database, "connected to the employee database");

        Ok(Self { conn })
    }

    /// Cleanly close the connection. Called on quit; process exit reclaims
    /// the socket either way.
    pub async fn disconnect(self) -> Result<()> {
        self.conn
            .disconnect()
            .await
            .map_err(|e| RosterError::connection_failed(format!("Failed to disconnect: {e}")))
    }
}

impl Store for Gateway {
    async fn list_departments(&mut self) -> Result<Vec<DepartmentRow>> {
        self.conn
            .exec_map(queries::LIST_DEPARTMENTS, (), |(id, name)| DepartmentRow { id, name })
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to list departments: {e}")))
    }

    async fn list_roles(&mut self) -> Result<Vec<RoleRow>> {
        self.conn
            .exec_map(queries::LIST_ROLES, (), |(id, title, salary, department)| RoleRow {
                id,
                title,
                salary,
                department,
            })
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to list roles: {e}")))
    }

    async fn list_employees(&mut self) -> Result<Vec<EmployeeRow>> {
        self.conn
            .exec_map(
                queries::LIST_EMPLOYEES,
                (),
                |(id, first_name, last_name, title, department, salary, manager)| EmployeeRow {
                    id,
                    first_name,
                    last_name,
                    title,
                    department,
                    salary,
                    manager,
                },
            )
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to list employees: {e}")))
    }

    async fn add_department(&mut self, name: &str) -> Result<()> {
        self.conn
            .exec_drop(queries::ADD_DEPARTMENT, (name,))
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to add department: {e}")))
    }

    async fn add_role(&mut self, title: &str, salary: &str, department: &str) -> Result<()> {
        self.conn
            .exec_drop(queries::ADD_ROLE, (title, salary, department))
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to add role: {e}")))
    }

    async fn add_employee(
        &mut self,
        first_name: &str,
        last_name: &str,
        role_title: &str,
        manager_id: Option<u32>,
    ) -> Result<()> {
        self.conn
            .exec_drop(queries::ADD_EMPLOYEE, (first_name, last_name, role_title, manager_id))
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to add employee: {e}")))
    }

    async fn update_employee_role(&mut self, employee_id: u32, role_title: &str) -> Result<()> {
        self.conn
            .exec_drop(queries::UPDATE_EMPLOYEE_ROLE, (role_title, employee_id))
            .await
            .map_err(|e| {
                RosterError::query_failed(format!("Failed to update employee role: {e}"))
            })
    }
}
