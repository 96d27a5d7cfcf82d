//! The six-field employee form and its client-side validation.

use std::collections::BTreeMap;
use std::fmt;

use roster_core::employee::{Employee, EmployeeInput};
use roster_core::validation::{coerce_salary, is_valid_email, is_valid_mobile_number};

/// One input of the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Position,
    Salary,
    Mobn,
    Address,
}

impl FormField {
    /// Every field, in display order.
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Position,
        FormField::Salary,
        FormField::Mobn,
        FormField::Address,
    ];

    /// The field's key in request bodies and error maps.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Position => "position",
            FormField::Salary => "salary",
            FormField::Mobn => "mobn",
            FormField::Address => "address",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validation messages keyed by the field they belong to.
pub type FieldErrors = BTreeMap<FormField, String>;

/// Raw text of each input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub position: String,
    pub salary: String,
    pub mobn: String,
    pub address: String,
}

impl EmployeeForm {
    /// Prefill the form from an existing row.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
            salary: employee.salary.to_string(),
            mobn: employee.mobn.clone(),
            address: employee.address.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Position => &self.position,
            FormField::Salary => &self.salary,
            FormField::Mobn => &self.mobn,
            FormField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Position => &mut self.position,
            FormField::Salary => &mut self.salary,
            FormField::Mobn => &mut self.mobn,
            FormField::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Check every field independently. An empty map means the form may be
    /// submitted.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name required".into());
        }

        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, "Email required".into());
        } else if !is_valid_email(&self.email) {
            errors.insert(FormField::Email, "Invalid email".into());
        }

        if self.position.trim().is_empty() {
            errors.insert(FormField::Position, "Position required".into());
        }

        if self.salary.trim().is_empty() {
            errors.insert(FormField::Salary, "Salary required".into());
        } else if coerce_salary(&self.salary) <= 0.0 {
            errors.insert(FormField::Salary, "Salary must be > 0".into());
        }

        if self.mobn.trim().is_empty() {
            errors.insert(FormField::Mobn, "Mobile number is required".into());
        } else if !is_valid_mobile_number(self.mobn.trim()) {
            errors.insert(
                FormField::Mobn,
                "Mobile number must contain only digits".into(),
            );
        }

        if self.address.trim().is_empty() {
            errors.insert(FormField::Address, "Address is required".into());
        }

        errors
    }

    /// The request payload for this form. Text is sent as typed, apart from
    /// the phone number whose surrounding whitespace is dropped.
    pub fn to_input(&self) -> EmployeeInput {
        EmployeeInput {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
            salary: coerce_salary(&self.salary),
            mobn: self.mobn.trim().to_string(),
            address: self.address.clone(),
        }
    }
}
