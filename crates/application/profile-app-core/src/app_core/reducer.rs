use profile_core::validate;

use crate::domain::{FormState, FormValidity, SaveStatus};

use super::events::FormEvent;

pub fn reduce<E>(mut state: FormState<E>, ev: FormEvent<E>) -> FormState<E> {
    apply_event(&mut state, ev);
    state
}

pub(crate) fn apply_event<E>(state: &mut FormState<E>, ev: FormEvent<E>) {
    match ev {
        FormEvent::BaselineLoaded(baseline) => {
            state.validity = FormValidity::evaluate(&baseline);
            state.draft = baseline.clone();
            state.baseline = baseline;
            state.error = None;
        }

        FormEvent::FieldEdited { field, value } => {
            let entry = state.validity.get_mut(field);
            entry.error = validate(field, &value).err();
            entry.touched = true;
            state.draft.set(field, value);
        }

        FormEvent::AllFieldsTouched => state.validity.touch_all(),

        FormEvent::SaveStarted => state.save = SaveStatus::InFlight,

        FormEvent::SaveSucceeded { saved } => {
            // Edits made while the request was pending stay dirty against
            // the record that was actually submitted.
            state.baseline = saved;
            state.error = None;
            state.save = SaveStatus::Idle;
        }

        FormEvent::SaveFailed(err) => {
            state.error = Some(err);
            state.save = SaveStatus::Idle;
        }

        FormEvent::SaveAbandoned => state.save = SaveStatus::Idle,
    }
}
