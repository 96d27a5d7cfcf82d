//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and issue exactly one statement.

pub mod employee_repo;

pub use employee_repo::EmployeeRepo;
