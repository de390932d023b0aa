pub mod app_core;
pub mod domain;
pub mod form;
pub mod persistence;
pub mod ports;
pub mod viewmodel;

pub use app_core::*;
pub use domain::{
    FieldValidity, FormState, FormValidity, SaveOutcome, SaveStatus, SkipReason,
    SubmissionResult,
};
pub use form::ProfileEditForm;
pub use persistence::{JsonCustomerStore, UpdateRejected};
pub use ports::*;
pub use profile_core::{ProfileField, ProfileFields, UpdateOperation, ValidationError};
pub use viewmodel::*;
