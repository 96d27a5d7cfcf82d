//! Employee entity and the request payload used to create or overwrite one.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{
    coerce_salary, is_valid_mobile_number, MSG_ALL_FIELDS_REQUIRED, MSG_INVALID_MOBILE,
};

/// A row from the `employees` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub position: String,
    pub salary: f64,
    pub mobn: String,
    pub address: String,
}

/// The six client-supplied fields of an employee.
///
/// Deserialization is lenient: every field may be missing or `null`
/// (becoming blank), `mobn` may arrive as a JSON number and loses any
/// surrounding whitespace, and `salary` may arrive as a numeric string. Whether blanks are acceptable is decided by
/// the operation, not the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_salary")]
    pub salary: f64,
    #[serde(default, deserialize_with = "lenient_phone")]
    pub mobn: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: String,
}

impl EmployeeInput {
    /// True when any of the six fields is blank. A zero salary counts as blank.
    pub fn has_missing_fields(&self) -> bool {
        self.name.is_empty()
            || self.email.is_empty()
            || self.position.is_empty()
            || self.salary == 0.0
            || self.mobn.is_empty()
            || self.address.is_empty()
    }

    /// Checks applied before inserting a new row.
    pub fn validate_for_create(&self) -> Result<(), CoreError> {
        if self.has_missing_fields() {
            return Err(CoreError::Validation(MSG_ALL_FIELDS_REQUIRED.to_string()));
        }
        if !is_valid_mobile_number(&self.mobn) {
            return Err(CoreError::Validation(MSG_INVALID_MOBILE.to_string()));
        }
        Ok(())
    }
}

impl From<&Employee> for EmployeeInput {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
            salary: employee.salary,
            mobn: employee.mobn.clone(),
            address: employee.address.clone(),
        }
    }
}

/// Any JSON scalar a form might post for a field.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Integer(n)) => n.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
    })
}

fn lenient_phone<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.trim().to_string())
}

fn lenient_salary<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => 0.0,
        Some(Scalar::Text(s)) => coerce_salary(&s),
        Some(Scalar::Integer(n)) => n as f64,
        Some(Scalar::Float(f)) if f.is_finite() => f,
        Some(Scalar::Float(_)) => 0.0,
        Some(Scalar::Bool(b)) => {
            if b {
                1.0
            } else {
                0.0
            }
        }
    })
}
