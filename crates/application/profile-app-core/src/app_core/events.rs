use profile_core::{ProfileField, ProfileFields};

#[derive(Debug, Clone)]
pub enum FormEvent<E> {
    // Baseline
    BaselineLoaded(ProfileFields),

    // Field editing
    FieldEdited { field: ProfileField, value: String },
    AllFieldsTouched,

    // Save lifecycle
    SaveStarted,
    SaveSucceeded { saved: ProfileFields },
    SaveFailed(E),
    SaveAbandoned,
}
