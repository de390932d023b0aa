use profile_core::{build_update_actions, changed_fields, ProfileField, ProfileFields, UpdateOperation};

// --- Helpers ---

fn willy() -> ProfileFields {
    ProfileFields::new("willy@wonka.com", "Willy", "Wonka")
}

fn ops(email: &str, first: &str, last: &str) -> Vec<UpdateOperation> {
    vec![
        UpdateOperation::ChangeEmail {
            email: email.to_string(),
        },
        UpdateOperation::SetFirstName {
            first_name: first.to_string(),
        },
        UpdateOperation::SetLastName {
            last_name: last.to_string(),
        },
    ]
}

// --- Tests ---

#[test]
fn unchanged_draft_yields_all_three_operations_in_order() {
    let baseline = willy();
    let actions = build_update_actions(&baseline, &baseline);

    assert_eq!(actions, ops("willy@wonka.com", "Willy", "Wonka"));
    assert!(changed_fields(&baseline, &baseline).is_empty());
}

#[test]
fn edited_field_carries_the_new_value_others_keep_baseline() {
    let baseline = willy();

    let mut draft = baseline.clone();
    draft.set(ProfileField::LastName, "Nilly");
    assert_eq!(
        build_update_actions(&draft, &baseline),
        ops("willy@wonka.com", "Willy", "Nilly")
    );

    let mut draft = baseline.clone();
    draft.set(ProfileField::Email, "willy@gmail.com");
    assert_eq!(
        build_update_actions(&draft, &baseline),
        ops("willy@gmail.com", "Willy", "Wonka")
    );
}

#[test]
fn order_is_fixed_regardless_of_which_field_changed() {
    let baseline = willy();
    let mut draft = baseline.clone();
    draft.set(ProfileField::LastName, "B");
    draft.set(ProfileField::Email, "b@b.io");

    let fields: Vec<ProfileField> = build_update_actions(&draft, &baseline)
        .iter()
        .map(UpdateOperation::field)
        .collect();
    assert_eq!(fields, ProfileField::ALL.to_vec());

    assert_eq!(
        changed_fields(&draft, &baseline),
        vec![ProfileField::Email, ProfileField::LastName]
    );
}

#[test]
fn whitespace_only_difference_counts_as_changed() {
    let baseline = willy();
    let mut draft = baseline.clone();
    draft.set(ProfileField::FirstName, "Willy ");

    assert_eq!(changed_fields(&draft, &baseline), vec![ProfileField::FirstName]);
}
