use anyhow::{Context, Result};
use profile_app_core::{
    CurrentUserSource, JsonCustomerStore, ProfileEditForm, ProfileField, ProfileFields,
    SaveOutcome, SkipReason, SubmissionResult, UpdateRejected,
};

use crate::FieldEdits;

pub fn cmd_show(store: &JsonCustomerStore) -> Result<()> {
    let fields = store.load()?;
    println!("{:<12} {}", "EMAIL", fields.email);
    println!("{:<12} {}", "FIRST NAME", fields.first_name);
    println!("{:<12} {}", "LAST NAME", fields.last_name);
    Ok(())
}

pub fn cmd_init(store: &JsonCustomerStore, fields: ProfileFields) -> Result<()> {
    store
        .save(&fields)
        .with_context(|| format!("Failed to initialise {}", store.path().display()))?;
    println!("Customer record written to {}.", store.path().display());
    Ok(())
}

/// Seeds a form from the store, applies `edits` and saves.
pub async fn cmd_edit(
    store: &JsonCustomerStore,
    edits: FieldEdits,
) -> Result<SaveOutcome<UpdateRejected>> {
    let form = ProfileEditForm::mount(store, store.clone())?;

    let requested = [
        (ProfileField::Email, edits.email),
        (ProfileField::FirstName, edits.first_name),
        (ProfileField::LastName, edits.last_name),
    ];
    for (field, value) in requested {
        if let Some(value) = value {
            form.set_field(field, value);
        }
    }

    let outcome = form.save().await;
    report(&form, &outcome);
    Ok(outcome)
}

fn report(form: &ProfileEditForm<JsonCustomerStore>, outcome: &SaveOutcome<UpdateRejected>) {
    match outcome {
        SaveOutcome::Skipped(SkipReason::Unchanged) => println!("Nothing to save."),
        SaveOutcome::Skipped(SkipReason::InFlight) => println!("A save is already running."),
        SaveOutcome::Skipped(SkipReason::Invalid) => {
            let vm = form.editor_vm();
            for (label, err) in [
                ("email", vm.email_error),
                ("firstName", vm.first_name_error),
                ("lastName", vm.last_name_error),
            ] {
                if let Some(err) = err {
                    eprintln!("{label}: {err}");
                }
            }
        }
        SaveOutcome::Submitted(SubmissionResult::Succeeded) => println!("Profile saved."),
        SaveOutcome::Submitted(SubmissionResult::Failed(err)) => {
            eprintln!("Profile update rejected: {err}");
        }
    }
}
