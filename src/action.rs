//! Action Dispatcher
//!
//! The menu-driven interaction loop. States: main menu, a running action,
//! the post-action menu, terminated. Every action runs to completion and
//! always lands on the post-action menu; errors are logged and printed,
//! never allowed to break the loop. Quit from either menu terminates.
//!
//! Menu selection maps an index straight into an [`Action`] variant, matched
//! exhaustively. There is no string dispatch and no unreachable
//! "invalid action" branch.

use crate::db::queries::EmployeeRow;
use crate::db::Store;
use crate::error::{Result, RosterError};
use crate::output::Outcome;
use crate::prompt::Prompter;

/// The seven operations selectable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
}

impl Action {
    /// All actions, in main-menu order.
    pub const ALL: [Self; 7] = [
        Self::ViewDepartments,
        Self::ViewRoles,
        Self::ViewEmployees,
        Self::AddDepartment,
        Self::AddRole,
        Self::AddEmployee,
        Self::UpdateEmployeeRole,
    ];

    /// Menu label for this action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViewDepartments => "View all Departments",
            Self::ViewRoles => "View all Roles",
            Self::ViewEmployees => "View all Employees",
            Self::AddDepartment => "Add a Department",
            Self::AddRole => "Add a Role",
            Self::AddEmployee => "Add an Employee",
            Self::UpdateEmployeeRole => "Update an Employee Role",
        }
    }
}

const MAIN_MENU_PROMPT: &str = "What would you like to do?";
const POST_ACTION_PROMPT: &str =
    "Would you like to return to the main menu or quit the program?";
const TERMINATION_MESSAGE: &str = "Program terminated";
const QUIT_LABEL: &str = "Quit";
const RETURN_LABEL: &str = "Return";
const NO_MANAGER_LABEL: &str = "None";

/// Run the interaction loop until the operator quits.
///
/// Returns `Ok(())` on quit from either menu; only a prompt-engine failure
/// (terminal gone) propagates as an error. Action failures are logged and
/// the loop continues.
pub async fn run<S, P>(store: &mut S, prompter: &mut P) -> Result<()>
where
    S: Store,
    P: Prompter,
{
    loop {
        let action = match main_menu(prompter)? {
            Some(action) => action,
            None => {
                println!("{TERMINATION_MESSAGE}");
                return Ok(());
            }
        };

        match perform(action, store, prompter).await {
            Ok(outcome) => println!("{outcome}"),
            Err(err) => {
                tracing::error!(code = err.error_code(), action = action.label(), "{err}");
                println!("{err}");
            }
        }

        if !return_or_quit(prompter)? {
            println!("{TERMINATION_MESSAGE}");
            return Ok(());
        }
    }
}

/// Main menu: `Some(action)` to run, `None` for quit.
fn main_menu<P: Prompter>(prompter: &mut P) -> Result<Option<Action>> {
    let mut labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    labels.push(QUIT_LABEL.to_string());

    let index = prompter.select(MAIN_MENU_PROMPT, &labels)?;
    Ok(Action::ALL.get(index).copied())
}

/// Post-action menu: `true` to return to the main menu, `false` to quit.
fn return_or_quit<P: Prompter>(prompter: &mut P) -> Result<bool> {
    let labels = vec![RETURN_LABEL.to_string(), QUIT_LABEL.to_string()];
    let index = prompter.select(POST_ACTION_PROMPT, &labels)?;
    Ok(index == 0)
}

/// Execute one action to completion.
async fn perform<S, P>(action: Action, store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: Store,
    P: Prompter,
{
    match action {
        Action::ViewDepartments => Ok(Outcome::table(&store.list_departments().await?)),
        Action::ViewRoles => Ok(Outcome::table(&store.list_roles().await?)),
        Action::ViewEmployees => Ok(Outcome::table(&store.list_employees().await?)),
        Action::AddDepartment => add_department(store, prompter).await,
        Action::AddRole => add_role(store, prompter).await,
        Action::AddEmployee => add_employee(store, prompter).await,
        Action::UpdateEmployeeRole => update_employee_role(store, prompter).await,
    }
}

async fn add_department<S, P>(store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: Store,
    P: Prompter,
{
    let name = prompter.input("What is the name of the department?")?;
    store.add_department(&name).await?;
    Ok(Outcome::message(format!("[{name}] Department added")))
}

async fn add_role<S, P>(store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: Store,
    P: Prompter,
{
    let departments = store.list_departments().await?;
    if departments.is_empty() {
        return Err(RosterError::invalid_input(
            "no departments exist yet; add a department first",
        ));
    }

    let title = prompter.input("What is the title of the role?")?;
    // Free text on purpose; the database decides whether it is numeric.
    let salary = prompter.input("What is the salary of the role?")?;

    let names: Vec<String> = departments.iter().map(|d| d.name.clone()).collect();
    let index = prompter.select("Which department does the role belong to?", &names)?;

    store.add_role(&title, &salary, &departments[index].name).await?;
    Ok(Outcome::message(format!("[{title}] Role added")))
}

async fn add_employee<S, P>(store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: Store,
    P: Prompter,
{
    let roles = store.list_roles().await?;
    if roles.is_empty() {
        return Err(RosterError::invalid_input("no roles exist yet; add a role first"));
    }
    let employees = store.list_employees().await?;

    let first_name = prompter.input("What is the first name of the employee?")?;
    let last_name = prompter.input("What is the last name of the employee?")?;

    let titles: Vec<String> = roles.iter().map(|r| r.title.clone()).collect();
    let role_index = prompter.select("What is the role of the employee?", &titles)?;

    // Ids ride alongside the labels; the selection is never re-parsed from
    // the displayed text.
    let mut manager_ids: Vec<Option<u32>> = vec![None];
    let mut manager_labels: Vec<String> = vec![NO_MANAGER_LABEL.to_string()];
    for employee in &employees {
        manager_ids.push(Some(employee.id));
        manager_labels.push(employee.choice_label());
    }
    let manager_index = prompter.select("Who is the manager of the employee?", &manager_labels)?;

    store
        .add_employee(&first_name, &last_name, &roles[role_index].title, manager_ids[manager_index])
        .await?;
    Ok(Outcome::message(format!("[{first_name} {last_name}] Employee added")))
}

async fn update_employee_role<S, P>(store: &mut S, prompter: &mut P) -> Result<Outcome>
where
    S: Store,
    P: Prompter,
{
    let employees = store.list_employees().await?;
    if employees.is_empty() {
        return Err(RosterError::invalid_input("no employees exist yet; add an employee first"));
    }
    let roles = store.list_roles().await?;
    if roles.is_empty() {
        return Err(RosterError::invalid_input("no roles exist yet; add a role first"));
    }

    let labels: Vec<String> = employees.iter().map(EmployeeRow::choice_label).collect();
    let employee_index =
        prompter.select("Which employee's role do you want to update?", &labels)?;

    let titles: Vec<String> = roles.iter().map(|r| r.title.clone()).collect();
    let role_index = prompter.select("What is the new role of the employee?", &titles)?;

    let employee = &employees[employee_index];
    store.update_employee_role(employee.id, &roles[role_index].title).await?;
    Ok(Outcome::message(format!("[{}] Employee role updated", employee.full_name())))
}
