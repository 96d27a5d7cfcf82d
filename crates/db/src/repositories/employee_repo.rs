//! Repository for the `employees` table.

use roster_core::employee::{Employee, EmployeeInput};
use roster_core::types::DbId;
use sqlx::PgPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, position, salary, mobn, address";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// List all employees, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id DESC");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Number of rows in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Find an employee by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new employee and return the store-assigned ID.
    pub async fn create(pool: &PgPool, input: &EmployeeInput) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO employees (name, email, position, salary, mobn, address)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.position)
        .bind(input.salary)
        .bind(&input.mobn)
        .bind(&input.address)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Overwrite all six fields of an employee.
    ///
    /// Returns `true` if a row was updated; a missing `id` is not an error.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &EmployeeInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE employees SET
                name = $2,
                email = $3,
                position = $4,
                salary = $5,
                mobn = $6,
                address = $7
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.position)
        .bind(input.salary)
        .bind(&input.mobn)
        .bind(&input.address)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete an employee by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
