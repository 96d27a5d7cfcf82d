//! Client side of the roster: an explicit form/list state container with
//! pure transitions, an HTTP client for the employee endpoints, and a
//! controller that wires the two together.
//!
//! Any front end drives the controller and renders [`RosterState`]. The
//! `roster` binary in [`cli`] is the terminal one.

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod form;
pub mod state;
pub mod table;

pub use api::{ApiError, EmployeeApi};
pub use config::ClientConfig;
pub use controller::{RosterController, SubmitOutcome};
pub use form::{EmployeeForm, FieldErrors, FormField};
pub use state::{FormMode, RosterState, SubmitCommand};
