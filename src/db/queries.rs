//! Fixed Query Library
//!
//! The seven parameterized SQL statements rosterctl ever issues, plus the
//! typed row shapes the read statements project into. Three reads with joins,
//! four writes. Referenced entities are resolved inside the statement itself
//! (department by name, role by title) so the application never re-derives
//! foreign keys client-side, except the manager id which is carried through
//! the choice list as a value.

/// `SELECT` every department.
pub const LIST_DEPARTMENTS: &str = "SELECT id, name FROM department";

/// Roles joined to their owning department name.
pub const LIST_ROLES: &str = "SELECT role.id, role.title, role.salary, department.name AS department \
     FROM role \
     JOIN department ON role.department_id = department.id";

/// Employees joined to role and department, self-joined to the manager.
///
/// The manager join is a LEFT JOIN, so `manager` comes back NULL (not an
/// error) for employees without a manager.
pub const LIST_EMPLOYEES: &str = "SELECT employee.id, employee.first_name, employee.last_name, role.title, \
     department.name AS department, role.salary, \
     CONCAT(manager.first_name, ' ', manager.last_name) AS manager \
     FROM employee \
     JOIN role ON employee.role_id = role.id \
     LEFT JOIN employee AS manager ON employee.manager_id = manager.id \
     LEFT JOIN department ON role.department_id = department.id";

/// Insert a department by name.
pub const ADD_DEPARTMENT: &str = "INSERT INTO department (name) VALUES (?)";

/// Insert a role; the owning department is resolved by name, not id.
///
/// An unknown department name makes the subquery yield NULL, which the
/// NOT NULL constraint on `department_id` rejects. No row is inserted.
pub const ADD_ROLE: &str = "INSERT INTO role (title, salary, department_id) \
     VALUES (?, ?, (SELECT id FROM department WHERE name = ?))";

/// Insert an employee; the role is resolved by title, the manager id is
/// passed directly (NULL for no manager).
pub const ADD_EMPLOYEE: &str = "INSERT INTO employee (first_name, last_name, role_id, manager_id) \
     VALUES (?, ?, (SELECT id FROM role WHERE title = ?), ?)";

/// Move one employee to a different role, resolved by title.
pub const UPDATE_EMPLOYEE_ROLE: &str =
    "UPDATE employee SET role_id = (SELECT id FROM role WHERE title = ?) WHERE id = ?";

/// One row of [`LIST_DEPARTMENTS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRow {
    pub id: u32,
    pub name: String,
}

/// One row of [`LIST_ROLES`].
///
/// `salary` stays a string end to end: it is collected as free text, stored
/// through the database's own coercion, and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRow {
    pub id: u32,
    pub title: String,
    pub salary: String,
    pub department: String,
}

/// One row of [`LIST_EMPLOYEES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: Option<String>,
    pub salary: String,
    pub manager: Option<String>,
}

impl EmployeeRow {
    /// Label shown in manager and update choice lists: `"<id> <first> <last>"`.
    ///
    /// Display only. The id travels alongside the label in the choice list,
    /// it is never parsed back out of this string.
    #[must_use]
    pub fn choice_label(&self) -> String {
        format!("{} {} {}", self.id, self.first_name, self.last_name)
    }

    /// `"<first> <last>"`, used in confirmation messages.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
