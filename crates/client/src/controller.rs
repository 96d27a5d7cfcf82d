//! Drives [`RosterState`] through the network calls the UI triggers.
//!
//! Network and service failures are logged and never surface as state: the
//! form keeps its contents and the list keeps its last fetched value.

use roster_core::types::DbId;

use crate::api::{ApiError, EmployeeApi};
use crate::form::FormField;
use crate::state::{RosterState, SubmitCommand};

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Client validation failed; no request was sent.
    Invalid,
    /// The create or update was acknowledged and the list re-fetched.
    Saved,
    /// The request failed; the form is unchanged.
    Failed(ApiError),
}

pub struct RosterController {
    api: EmployeeApi,
    state: RosterState,
}

impl RosterController {
    pub fn new(api: EmployeeApi) -> Self {
        Self {
            api,
            state: RosterState::new(),
        }
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.field_changed(field, value);
    }

    /// Initial load of the full list.
    pub async fn load(&mut self) {
        self.refresh().await;
    }

    /// Validate and save the form, then re-fetch the list.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(command) = self.state.submit_requested() else {
            tracing::debug!(errors = self.state.errors().len(), "Form failed validation");
            return SubmitOutcome::Invalid;
        };

        let result = match &command {
            SubmitCommand::Create(input) => self.api.create(input).await,
            SubmitCommand::Update(id, input) => self.api.update(*id, input).await,
        };

        match result {
            Ok(message) => {
                tracing::info!(%message, "Employee saved");
                self.state.submit_succeeded();
                self.refresh().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::error!(error = %e, "Save error");
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Switch the form to edit the given row. Returns `false` if the row is
    /// not in the current list.
    pub fn edit(&mut self, id: DbId) -> bool {
        self.state.edit_selected(id)
    }

    /// Delete a row, then re-fetch whether or not the delete succeeded.
    pub async fn delete(&mut self, id: DbId) -> Result<(), ApiError> {
        let result = self.api.delete(id).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, employee_id = id, "Delete error");
        }
        self.refresh().await;
        result.map(|_| ())
    }

    async fn refresh(&mut self) {
        match self.api.list().await {
            Ok(employees) => self.state.fetch_succeeded(employees),
            Err(e) => tracing::error!(error = %e, "Fetch error"),
        }
    }
}
