//! Domain types shared by the roster store, service and client.

pub mod employee;
pub mod error;
pub mod types;
pub mod validation;
