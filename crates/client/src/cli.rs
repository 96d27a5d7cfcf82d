//! Command-line front end for the roster: argument parsing and the
//! command runner used by the `roster` binary.

use clap::{Args, Parser, Subcommand};
use roster_core::types::DbId;

use crate::api::{ApiError, EmployeeApi};
use crate::config::ClientConfig;
use crate::controller::{RosterController, SubmitOutcome};
use crate::form::{FieldErrors, FormField};
use crate::table::render_table;

/// `roster` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "roster",
    about = "List, add, edit and delete employees on a roster server",
    version
)]
pub struct Cli {
    /// Base URL of the roster API. Falls back to `ROSTER_API_URL` when omitted.
    #[arg(long = "api-url", value_name = "url", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the employee table (the default).
    List,
    /// Add an employee; every field is required.
    Add(FieldArgs),
    /// Overwrite the given fields of an existing employee.
    Edit {
        id: DbId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete an employee.
    Delete { id: DbId },
}

/// Form inputs, one flag per field. Omitted flags leave the field as is.
#[derive(Debug, Default, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub salary: Option<String>,
    #[arg(long, value_name = "digits")]
    pub mobn: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

/// Why a command did not complete.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("employee form is invalid:\n{}", describe_field_errors(.0))]
    Invalid(FieldErrors),

    #[error("no employee with id {0}")]
    UnknownEmployee(DbId),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        match &self.api_url {
            Some(url) => ClientConfig::new(url.as_str()),
            None => ClientConfig::from_env(),
        }
    }

    /// Run the selected command against the configured server.
    pub async fn execute(self) -> Result<String, CliError> {
        let api = EmployeeApi::new(&self.client_config());
        let mut controller = RosterController::new(api);
        run(self.command.unwrap_or(Command::List), &mut controller).await
    }
}

impl FieldArgs {
    fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Position => self.position.as_deref(),
            FormField::Salary => self.salary.as_deref(),
            FormField::Mobn => self.mobn.as_deref(),
            FormField::Address => self.address.as_deref(),
        }
    }

    /// Type each supplied value into the controller's form.
    pub fn apply(&self, controller: &mut RosterController) {
        for field in FormField::ALL {
            if let Some(value) = self.get(field) {
                controller.set_field(field, value);
            }
        }
    }
}

/// Load the list, apply `command`, and return the table as it stands
/// afterwards.
pub async fn run(command: Command, controller: &mut RosterController) -> Result<String, CliError> {
    controller.load().await;

    match command {
        Command::List => {}
        Command::Add(fields) => {
            fields.apply(controller);
            save(controller).await?;
        }
        Command::Edit { id, fields } => {
            if !controller.edit(id) {
                return Err(CliError::UnknownEmployee(id));
            }
            fields.apply(controller);
            save(controller).await?;
        }
        Command::Delete { id } => controller.delete(id).await?,
    }

    Ok(render_table(controller.state().employees()))
}

async fn save(controller: &mut RosterController) -> Result<(), CliError> {
    match controller.submit().await {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Invalid => Err(CliError::Invalid(controller.state().errors().clone())),
        SubmitOutcome::Failed(e) => Err(e.into()),
    }
}

/// One `field: message` line per failing field, in form order.
pub fn describe_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}
