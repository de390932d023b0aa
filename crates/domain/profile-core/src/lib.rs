use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod diff;
pub mod validation;

pub use diff::{build_update_actions, changed_fields};
pub use validation::{validate, ValidationError};

/// The three editable fields of a customer profile.
///
/// Used both for the baseline (last saved record) and the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl ProfileFields {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Email => &self.email,
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Email => self.email = value,
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
        }
    }

    /// Applies a single update operation to this record.
    pub fn apply(&mut self, op: &UpdateOperation) {
        self.set(op.field(), op.value());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Email,
    FirstName,
    LastName,
}

impl ProfileField {
    /// Fixed submission order.
    pub const ALL: [ProfileField; 3] = [
        ProfileField::Email,
        ProfileField::FirstName,
        ProfileField::LastName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::FirstName => "firstName",
            ProfileField::LastName => "lastName",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile field '{0}' (expected email, firstName or lastName)")]
pub struct UnknownField(pub String);

impl FromStr for ProfileField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(ProfileField::Email),
            "firstName" | "first_name" => Ok(ProfileField::FirstName),
            "lastName" | "last_name" => Ok(ProfileField::LastName),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// A single field-change instruction sent to the customer update mutation.
///
/// Serializes in the mutation's action shape, e.g.
/// `{"changeEmail":{"email":"a@b.co"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateOperation {
    ChangeEmail {
        email: String,
    },
    SetFirstName {
        #[serde(rename = "firstName")]
        first_name: String,
    },
    SetLastName {
        #[serde(rename = "lastName")]
        last_name: String,
    },
}

impl UpdateOperation {
    pub fn for_field(field: ProfileField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ProfileField::Email => UpdateOperation::ChangeEmail { email: value },
            ProfileField::FirstName => UpdateOperation::SetFirstName { first_name: value },
            ProfileField::LastName => UpdateOperation::SetLastName { last_name: value },
        }
    }

    pub fn field(&self) -> ProfileField {
        match self {
            UpdateOperation::ChangeEmail { .. } => ProfileField::Email,
            UpdateOperation::SetFirstName { .. } => ProfileField::FirstName,
            UpdateOperation::SetLastName { .. } => ProfileField::LastName,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            UpdateOperation::ChangeEmail { email } => email,
            UpdateOperation::SetFirstName { first_name } => first_name,
            UpdateOperation::SetLastName { last_name } => last_name,
        }
    }
}
