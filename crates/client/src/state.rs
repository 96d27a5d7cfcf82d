//! Explicit state container for the employee form and table.
//!
//! Every transition is a plain method with no I/O so it can be driven from
//! any front end and tested without a server.

use roster_core::employee::{Employee, EmployeeInput};
use roster_core::types::DbId;

use crate::form::{EmployeeForm, FieldErrors, FormField};

/// Whether a submit will insert a new row or overwrite an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(DbId),
}

/// The network call a validated submit asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitCommand {
    Create(EmployeeInput),
    Update(DbId, EmployeeInput),
}

#[derive(Debug, Clone, Default)]
pub struct RosterState {
    employees: Vec<Employee>,
    form: EmployeeForm,
    edit_id: Option<DbId>,
    errors: FieldErrors,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The list from the most recent successful fetch.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn mode(&self) -> FormMode {
        match self.edit_id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    /// Mirror a keystroke into the form.
    pub fn field_changed(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn fetch_succeeded(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    /// Validate the form and, if it passes, describe the call to make.
    ///
    /// Returns `None` when any field fails; the messages are left in
    /// [`errors`](Self::errors) and no request should be sent.
    pub fn submit_requested(&mut self) -> Option<SubmitCommand> {
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return None;
        }
        let input = self.form.to_input();
        Some(match self.edit_id {
            Some(id) => SubmitCommand::Update(id, input),
            None => SubmitCommand::Create(input),
        })
    }

    /// The save went through: reset to a blank form in create mode.
    pub fn submit_succeeded(&mut self) {
        self.form = EmployeeForm::default();
        self.errors.clear();
        self.edit_id = None;
    }

    /// Load a row from the current list into the form for editing.
    ///
    /// Returns `false` (and changes nothing) if `id` is not in the list.
    pub fn edit_selected(&mut self, id: DbId) -> bool {
        let Some(employee) = self.employees.iter().find(|e| e.id == id) else {
            return false;
        };
        self.form = EmployeeForm::from_employee(employee);
        self.edit_id = Some(id);
        true
    }
}
