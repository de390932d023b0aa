use std::sync::Arc;

use profile_core::{ProfileField, ProfileFields, UnknownField, UpdateOperation};

use crate::app_core::{FormEvent, FormStore};
use crate::domain::{FormState, SaveOutcome, SkipReason, SubmissionResult};
use crate::ports::{CurrentUserSource, CustomerUpdater};
use crate::viewmodel::{error_display_vm, profile_editor_vm, ErrorDisplayVm, ProfileEditorVm};

/// Controller behind the "edit profile" form.
///
/// Holds the draft and baseline in a [`FormStore`] and submits changes
/// through a [`CustomerUpdater`]. Cloning yields another handle to the same
/// form.
pub struct ProfileEditForm<U: CustomerUpdater> {
    pub store: FormStore<U::Error>,
    updater: Arc<U>,
}

impl<U: CustomerUpdater> Clone for ProfileEditForm<U> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            updater: Arc::clone(&self.updater),
        }
    }
}

impl<U: CustomerUpdater> ProfileEditForm<U> {
    pub fn new(baseline: ProfileFields, updater: U) -> Self {
        Self {
            store: FormStore::new(FormState::seeded(baseline)),
            updater: Arc::new(updater),
        }
    }

    /// Seeds a new form from the current user record.
    pub fn mount<S: CurrentUserSource>(source: &S, updater: U) -> anyhow::Result<Self> {
        Ok(Self::new(source.load()?, updater))
    }

    /// Replaces the baseline after the record changed out of band. The draft
    /// is reset to the new record.
    pub fn replace_baseline(&self, baseline: ProfileFields) {
        tracing::debug!("profile baseline replaced");
        self.store.apply(FormEvent::BaselineLoaded(baseline));
    }

    pub fn reload_baseline<S: CurrentUserSource>(&self, source: &S) -> anyhow::Result<()> {
        let baseline = source.load()?;
        self.replace_baseline(baseline);
        Ok(())
    }

    pub fn set_field(&self, field: ProfileField, value: impl Into<String>) {
        self.store.apply(FormEvent::FieldEdited {
            field,
            value: value.into(),
        });
    }

    pub fn set_field_by_name(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn has_changed(&self) -> bool {
        self.store.read(FormState::has_changed)
    }

    pub fn update_actions(&self) -> Vec<UpdateOperation> {
        self.store.read(FormState::update_actions)
    }

    pub fn error(&self) -> Option<U::Error> {
        self.store.read(|s| s.error.clone())
    }

    pub fn editor_vm(&self) -> ProfileEditorVm {
        self.store.read(profile_editor_vm)
    }

    pub fn error_display_vm(&self) -> ErrorDisplayVm<U::Error> {
        self.store.read(error_display_vm)
    }

    /// Submits the draft if it is dirty and valid.
    ///
    /// Never fails: a rejection is stored as the form's error and also
    /// returned in the outcome. A save requested while another is pending is
    /// skipped with [`SkipReason::InFlight`].
    pub async fn save(&self) -> SaveOutcome<U::Error> {
        let gate = self.store.with_state_mut(|state| -> Result<_, SkipReason> {
            state.save_gate()?;
            let pending = (state.update_actions(), state.draft.clone(), state.changed_fields());
            crate::app_core::reducer::apply_event(state, FormEvent::SaveStarted);
            Ok(pending)
        });

        let (actions, submitted, changed) = match gate {
            Ok(pending) => pending,
            Err(reason) => {
                tracing::debug!(?reason, "profile save skipped");
                if reason == SkipReason::Invalid {
                    self.store.apply(FormEvent::AllFieldsTouched);
                }
                return SaveOutcome::Skipped(reason);
            }
        };

        tracing::info!(?changed, "submitting customer update");
        let guard = InFlight {
            store: &self.store,
            settled: false,
        };

        match self.updater.update_customer(actions).await {
            Ok(()) => {
                tracing::info!("customer update succeeded");
                guard.settle(FormEvent::SaveSucceeded { saved: submitted });
                SaveOutcome::Submitted(SubmissionResult::Succeeded)
            }
            Err(err) => {
                tracing::warn!(error = ?err, "customer update rejected");
                guard.settle(FormEvent::SaveFailed(err.clone()));
                SaveOutcome::Submitted(SubmissionResult::Failed(err))
            }
        }
    }
}

/// Clears the in-flight flag if a pending save is dropped before settling.
struct InFlight<'a, E> {
    store: &'a FormStore<E>,
    settled: bool,
}

impl<E> InFlight<'_, E> {
    fn settle(mut self, ev: FormEvent<E>) {
        self.settled = true;
        self.store.apply(ev);
    }
}

impl<E> Drop for InFlight<'_, E> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("pending profile save dropped before settling");
            self.store.apply(FormEvent::SaveAbandoned);
        }
    }
}
