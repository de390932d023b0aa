use camino::Utf8PathBuf;
use profile_app_core::{
    CurrentUserSource, ProfileFields, SaveOutcome, SkipReason, SubmissionResult,
};
use profile_cli::{commands, open_store, FieldEdits};

fn store_in(dir: &tempfile::TempDir) -> profile_app_core::JsonCustomerStore {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("customer.json")).unwrap();
    open_store(Some(path)).unwrap()
}

#[tokio::test]
async fn init_edit_show_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    commands::cmd_init(&store, ProfileFields::new("willy@wonka.com", "Willy", "Wonka")).unwrap();

    let outcome = commands::cmd_edit(
        &store,
        FieldEdits {
            first_name: Some("Charlie".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(outcome, SaveOutcome::Submitted(SubmissionResult::Succeeded));
    assert_eq!(store.load().unwrap().first_name, "Charlie");

    commands::cmd_show(&store).unwrap();
}

#[tokio::test]
async fn edit_without_changes_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    commands::cmd_init(&store, ProfileFields::new("willy@wonka.com", "Willy", "Wonka")).unwrap();

    let outcome = commands::cmd_edit(
        &store,
        FieldEdits {
            email: Some("willy@wonka.com".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(outcome, SaveOutcome::Skipped(SkipReason::Unchanged));
}

#[tokio::test]
async fn invalid_email_is_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    commands::cmd_init(&store, ProfileFields::new("willy@wonka.com", "Willy", "Wonka")).unwrap();

    let outcome = commands::cmd_edit(
        &store,
        FieldEdits {
            email: Some("willy.gmail.com".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(outcome, SaveOutcome::Skipped(SkipReason::Invalid));
    assert_eq!(store.load().unwrap().email, "willy@wonka.com");
}

#[tokio::test]
async fn edit_without_record_fails_to_mount() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let err = commands::cmd_edit(&store, FieldEdits::default()).await.unwrap_err();
    assert!(err.to_string().contains("No customer record"));
}
