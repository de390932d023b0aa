use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use profile_app_core::ports::CustomerUpdater;
use profile_app_core::{
    ProfileEditForm, ProfileField, ProfileFields, SaveOutcome, SkipReason, SubmissionResult,
    UpdateOperation,
};
use tokio::sync::Notify;

/// Blocks every update until `release` is notified.
struct GatedUpdater {
    release: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl CustomerUpdater for GatedUpdater {
    type Error = String;

    async fn update_customer(&self, _actions: Vec<UpdateOperation>) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(())
    }
}

fn gated_form() -> (ProfileEditForm<GatedUpdater>, Arc<Notify>, Arc<AtomicUsize>) {
    let release = Arc::new(Notify::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let form = ProfileEditForm::new(
        ProfileFields::new("willy@wonka.com", "Willy", "Wonka"),
        GatedUpdater {
            release: release.clone(),
            calls: calls.clone(),
        },
    );
    form.set_field(ProfileField::FirstName, "Wil");
    (form, release, calls)
}

#[tokio::test]
async fn second_save_while_pending_is_skipped() {
    let (form, release, calls) = gated_form();

    let (first, second, ()) = tokio::join!(form.save(), form.save(), async {
        release.notify_one();
    });

    assert_eq!(first, SaveOutcome::Submitted(SubmissionResult::Succeeded));
    assert_eq!(second, SaveOutcome::Skipped(SkipReason::InFlight));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!form.editor_vm().is_saving);
}

#[tokio::test]
async fn pending_save_blocks_can_save_but_not_editing() {
    let (form, release, _calls) = gated_form();

    let mut pending = Box::pin(form.save());
    assert!(futures::poll!(&mut pending).is_pending());

    let vm = form.editor_vm();
    assert!(vm.is_saving);
    assert!(!vm.can_save);

    form.set_field(ProfileField::LastName, "Wonk");
    release.notify_one();
    assert_eq!(
        pending.await,
        SaveOutcome::Submitted(SubmissionResult::Succeeded)
    );

    // Only the submitted draft became the baseline.
    let state = form.store.state();
    assert_eq!(state.baseline.first_name, "Wil");
    assert_eq!(state.baseline.last_name, "Wonka");
    assert!(form.has_changed());
}

#[tokio::test]
async fn dropping_a_pending_save_releases_the_guard() {
    let (form, _release, calls) = gated_form();

    let mut pending = Box::pin(form.save());
    assert!(futures::poll!(&mut pending).is_pending());
    assert!(form.editor_vm().is_saving);
    drop(pending);

    assert!(!form.editor_vm().is_saving);
    assert!(form.editor_vm().can_save);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
