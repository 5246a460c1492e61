//! Dispatcher Loop Tests
//!
//! Drives the full menu → action → post-action-menu state machine with a
//! scripted operator and an in-memory `Store`, validating:
//! - Quit from either menu ends the loop cleanly
//! - Every action, success or failure, lands back on a menu
//! - Inserts become visible to the list views
//! - Manager "None" stores NULL; a chosen manager stores their id
//! - Role updates touch exactly one employee and nothing else
//! - Salary passes through as typed, unvalidated

use std::collections::VecDeque;

use pretty_assertions::assert_eq;

use rosterctl::{DepartmentRow, EmployeeRow, Prompter, Result, RoleRow, RosterError, Store};

// ============================================================================
// Test Doubles
// ============================================================================

/// In-memory stand-in for the MySQL gateway. Resolves names and titles the
/// way the fixed SQL statements do, and fails the same way when a referenced
/// name does not exist.
#[derive(Default)]
struct MemStore {
    departments: Vec<(u32, String)>,
    /// (id, title, salary, department_id)
    roles: Vec<(u32, String, String, u32)>,
    /// (id, first_name, last_name, role_id, manager_id)
    employees: Vec<(u32, String, String, u32, Option<u32>)>,
    next_id: u32,
}

impl MemStore {
    fn alloc_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn seed_department(&mut self, id: u32, name: &str) {
        self.departments.push((id, name.to_string()));
        self.next_id = self.next_id.max(id);
    }

    fn seed_role(&mut self, id: u32, title: &str, salary: &str, department_id: u32) {
        self.roles.push((id, title.to_string(), salary.to_string(), department_id));
        self.next_id = self.next_id.max(id);
    }

    fn seed_employee(
        &mut self,
        id: u32,
        first: &str,
        last: &str,
        role_id: u32,
        manager_id: Option<u32>,
    ) {
        self.employees.push((id, first.to_string(), last.to_string(), role_id, manager_id));
        self.next_id = self.next_id.max(id);
    }

    fn department_id(&self, name: &str) -> Option<u32> {
        self.departments.iter().find(|(_, n)| n == name).map(|(id, _)| *id)
    }

    fn role_id(&self, title: &str) -> Option<u32> {
        self.roles.iter().find(|(_, t, _, _)| t == title).map(|(id, _, _, _)| *id)
    }
}

impl Store for MemStore {
    async fn list_departments(&mut self) -> Result<Vec<DepartmentRow>> {
        Ok(self
            .departments
            .iter()
            .map(|(id, name)| DepartmentRow { id: *id, name: name.clone() })
            .collect())
    }

    async fn list_roles(&mut self) -> Result<Vec<RoleRow>> {
        Ok(self
            .roles
            .iter()
            .map(|(id, title, salary, department_id)| RoleRow {
                id: *id,
                title: title.clone(),
                salary: salary.clone(),
                department: self
                    .departments
                    .iter()
                    .find(|(did, _)| did == department_id)
                    .map(|(_, name)| name.clone())
                    .unwrap_or_default(),
            })
            .collect())
    }

    async fn list_employees(&mut self) -> Result<Vec<EmployeeRow>> {
        Ok(self
            .employees
            .iter()
            .map(|(id, first, last, role_id, manager_id)| {
                let role = self.roles.iter().find(|(rid, _, _, _)| rid == role_id);
                let manager = manager_id.and_then(|mid| {
                    self.employees
                        .iter()
                        .find(|(eid, _, _, _, _)| *eid == mid)
                        .map(|(_, f, l, _, _)| format!("{f} {l}"))
                });
                EmployeeRow {
                    id: *id,
                    first_name: first.clone(),
                    last_name: last.clone(),
                    title: role.map(|(_, t, _, _)| t.clone()).unwrap_or_default(),
                    department: role.and_then(|(_, _, _, did)| {
                        self.departments
                            .iter()
                            .find(|(d, _)| d == did)
                            .map(|(_, name)| name.clone())
                    }),
                    salary: role.map(|(_, _, s, _)| s.clone()).unwrap_or_default(),
                    manager,
                }
            })
            .collect())
    }

    async fn add_department(&mut self, name: &str) -> Result<()> {
        let id = self.alloc_id();
        self.departments.push((id, name.to_string()));
        Ok(())
    }

    async fn add_role(&mut self, title: &str, salary: &str, department: &str) -> Result<()> {
        // Same failure the real statement produces when the name subquery
        // yields NULL against a NOT NULL column.
        let department_id = self.department_id(department).ok_or_else(|| {
            RosterError::query_failed("Column 'department_id' cannot be null")
        })?;
        let id = self.alloc_id();
        self.roles.push((id, title.to_string(), salary.to_string(), department_id));
        Ok(())
    }

    async fn add_employee(
        &mut self,
        first_name: &str,
        last_name: &str,
        role_title: &str,
        manager_id: Option<u32>,
    ) -> Result<()> {
        let role_id = self
            .role_id(role_title)
            .ok_or_else(|| RosterError::query_failed("Column 'role_id' cannot be null"))?;
        let id = self.alloc_id();
        self.employees.push((
            id,
            first_name.to_string(),
            last_name.to_string(),
            role_id,
            manager_id,
        ));
        Ok(())
    }

    async fn update_employee_role(&mut self, employee_id: u32, role_title: &str) -> Result<()> {
        let role_id = self
            .role_id(role_title)
            .ok_or_else(|| RosterError::query_failed("Column 'role_id' cannot be null"))?;
        // An UPDATE matching no row still succeeds with zero rows affected.
        if let Some(employee) = self.employees.iter_mut().find(|(id, _, _, _, _)| *id == employee_id)
        {
            employee.3 = role_id;
        }
        Ok(())
    }
}

/// Scripted operator: answers prompts from a fixed list of steps, selecting
/// menu options by label so the tests read like a session transcript.
struct ScriptedPrompter {
    steps: VecDeque<Step>,
}

enum Step {
    Choose(&'static str),
    Type(&'static str),
}

impl ScriptedPrompter {
    fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self { steps: steps.into_iter().collect() }
    }

    fn finished(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, options: &[String]) -> Result<usize> {
        match self.steps.pop_front() {
            Some(Step::Choose(label)) => Ok(options
                .iter()
                .position(|option| option == label)
                .unwrap_or_else(|| {
                    panic!("option {label:?} not offered for {message:?}: {options:?}")
                })),
            Some(Step::Type(_)) => panic!("script expected free text but got menu {message:?}"),
            None => panic!("script exhausted at menu {message:?}"),
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        match self.steps.pop_front() {
            Some(Step::Type(answer)) => Ok(answer.to_string()),
            Some(Step::Choose(_)) => panic!("script expected a menu but got input {message:?}"),
            None => panic!("script exhausted at input {message:?}"),
        }
    }
}

use Step::{Choose, Type};

fn seeded_store() -> MemStore {
    let mut store = MemStore::default();
    store.seed_department(1, "Engineering");
    store.seed_department(2, "Sales");
    store.seed_role(3, "Engineer", "120000", 1);
    store.seed_role(4, "Manager", "150000", 1);
    store.seed_employee(7, "Jane", "Doe", 4, None);
    store
}

// ============================================================================
// Quit Paths
// ============================================================================

#[tokio::test]
async fn quit_from_main_menu_ends_loop() {
    let mut store = MemStore::default();
    let mut prompter = ScriptedPrompter::new([Choose("Quit")]);

    rosterctl::action::run(&mut store, &mut prompter).await.unwrap();

    assert!(prompter.finished());
    assert!(store.departments.is_empty());
}

#[tokio::test]
async fn quit_from_post_action_menu_ends_loop() {
    let mut store = seeded_store();
    let mut prompter = ScriptedPrompter::new([Choose("View all Departments"), Choose("Quit")]);

    rosterctl::action::run(&mut store, &mut prompter).await.unwrap();

    assert!(prompter.finished());
}

// ============================================================================
// Inserts
// ============================================================================

#[tokio::test]
async fn added_department_appears_in_listing() {
    let mut store = MemStore::default();
    let mut prompter = ScriptedPrompter::new([
        Choose("Add a Department"),
        Type("Engineering"),
        Choose("Return"),
        Choose("Quit"),
    ]);

    rosterctl::action::run(&mut store, &mut prompter).await.unwrap();

    let departments = store.list_departments().await.unwrap();
    assert!(departments.iter().any(|d| d.name == "Engineering"));
}

#[tokio::test]
async fn added_role_lands_under_chosen_department() {
    let mut store = seeded_store();
    let mut prompter = ScriptedPrompter::new([
        Choose("Add a Role"),
        Type("Account Executive"),
        Type("90000"),
        Choose("Sales"),
        Choose("Return"),
        Choose("Quit"),
    ]);

    rosterctl::action::run(&mut store, &mut prompter).await.unwrap();

    let roles = store.list_roles().await.unwrap();
    let role = roles.iter().find(|r| r.title == "Account Executive").unwrap();
    assert_eq!(role.department, "Sales");
    assert_eq!(role.salary, "90000");
}

#[tokio::test]
async fn salary_passes_through_unvalidated() {
    let mut store = seeded_store();
    let mut prompter = ScriptedPrompter::new([
        Choose("Add a Role"),
        Type("Mystery Role"),
        Type("not-a-number"),
        Choose("Engineering"),
        Choose("Return"),
        Choose("Quit"),
    ]);

    rosterctl::action::run(&mut store, &mut prompter).await.unwrap();

    let roles = store.list_roles().await.unwrap();
    let role = roles.iter().find(|r| r.title == "Mystery Role").unwrap();
    assert_eq!(role.salary, "not-a-number");
}

#[tokio::test]
async fn manager_none_stores_null() {
    let mut store = seeded_store();
    let mut prompter = ScriptedPrompter::new([
        Choose("Add an Employee"),
        Type("Ada"),
        Type("Lovelace"),
        Choose("Engineer"),
        Choose("None"),
        Choose("Return"),
        Choose("Quit"),
    ]);

    rosterctl::action::run(&mut store, &mut prompter).await.unwrap();

    let (_, first, _, _, manager_id) =
        store.employees.iter().find(|(_, f, _, _, _)| f == "Ada").unwrap();
    assert_eq!(first, "Ada");
    assert_eq!(*manager_id, None);
}

#[tokio::test]
async fn chosen_manager_stores_their_id() {
    let mut store = seeded_store();
    let mut prompter = ScriptedPrompter::new([
        Choose("Add an Employee"),
        Type("Ada"),
        Type("Lovelace"),
        Choose("Engineer"),
        Choose("7 Jane Doe"),
        Choose("Return"),
        Choose("Quit"),
    ]);

    rosterctl::action::run(&mut store, &mut prompter).await.unwrap();

    let (_, _, _, _, manager_id) =
        store.employees.iter().find(|(_, f, _, _, _)| f == "Ada").unwrap();
    assert_eq!(*manager_id, Some(7));

    // And the listing resolves the manager's name, not their id
    let employees = store.list_employees().await.unwrap();
    let ada = employees.iter().find(|e| e.first_name == "Ada").unwrap();
    assert_eq!(ada.manager.as_deref(), Some("Jane Doe"));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn role_update_touches_exactly_one_employee() {
    let mut store = seeded_store();
    store.seed_employee(8, "Ada", "Lovelace", 3, Some(7));

    let mut prompter = ScriptedPrompter::new([
        Choose("Update an Employee Role"),
        Choose("8 Ada Lovelace"),
        Choose("Manager"),
        Choose("Return"),
        Choose("Quit"),
    ]);

    rosterctl::action::run(&mut store, &mut prompter).await.unwrap();

    let ada = store.employees.iter().find(|(id, ..)| *id == 8).unwrap();
    assert_eq!(ada.3, 4, "Ada should now hold the Manager role");
    assert_eq!(ada.1, "Ada");
    assert_eq!(ada.4, Some(7), "other columns stay untouched");

    let jane = store.employees.iter().find(|(id, ..)| *id == 7).unwrap();
    assert_eq!(jane.3, 4, "Jane's role is unchanged");
}

// ============================================================================
// Failure Handling
// ============================================================================

#[tokio::test]
async fn failed_action_still_returns_to_menu() {
    // No departments exist, so Add a Role fails before prompting; the loop
    // must carry on to the post-action menu regardless.
    let mut store = MemStore::default();
    let mut prompter = ScriptedPrompter::new([
        Choose("Add a Role"),
        Choose("Return"),
        Choose("Quit"),
    ]);

    rosterctl::action::run(&mut store, &mut prompter).await.unwrap();

    assert!(prompter.finished());
    assert!(store.roles.is_empty());
}

#[tokio::test]
async fn unknown_reference_fails_without_inserting() {
    let mut store = MemStore::default();

    let err = store.add_role("Ghost", "1", "No Such Department").await.unwrap_err();
    assert_eq!(err.error_code(), "QUERY_FAILED");
    assert!(store.roles.is_empty());

    let err = store.add_employee("A", "B", "No Such Role", None).await.unwrap_err();
    assert_eq!(err.error_code(), "QUERY_FAILED");
    assert!(store.employees.is_empty());
}
