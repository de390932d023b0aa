use profile_core::ProfileFields;

use crate::domain::FormState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditorVm {
    pub draft: ProfileFields,
    pub email_error: Option<String>,
    pub first_name_error: Option<String>,
    pub last_name_error: Option<String>,
    pub has_changed: bool,
    pub can_save: bool,
    pub is_saving: bool,
}

pub fn profile_editor_vm<E>(state: &FormState<E>) -> ProfileEditorVm {
    let shown = |v: &crate::domain::FieldValidity| v.visible_error().map(|e| e.to_string());

    let has_changed = state.has_changed();
    let is_saving = state.is_saving();

    ProfileEditorVm {
        draft: state.draft.clone(),
        email_error: shown(&state.validity.email),
        first_name_error: shown(&state.validity.first_name),
        last_name_error: shown(&state.validity.last_name),
        has_changed,
        can_save: has_changed && state.validity.all_valid() && !is_saving,
        is_saving,
    }
}

/// Input of the server-error component. `None` renders nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDisplayVm<E> {
    pub error: Option<E>,
}

pub fn error_display_vm<E: Clone>(state: &FormState<E>) -> ErrorDisplayVm<E> {
    ErrorDisplayVm {
        error: state.error.clone(),
    }
}
