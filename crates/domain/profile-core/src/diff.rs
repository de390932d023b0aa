use crate::{ProfileField, ProfileFields, UpdateOperation};

/// Builds the update actions for a draft.
///
/// Always returns one operation per field in the fixed order email, first
/// name, last name, each carrying the draft's current value. Whether the
/// actions are submitted at all is decided by the caller.
pub fn build_update_actions(
    draft: &ProfileFields,
    _baseline: &ProfileFields,
) -> Vec<UpdateOperation> {
    ProfileField::ALL
        .iter()
        .map(|&field| UpdateOperation::for_field(field, draft.get(field)))
        .collect()
}

/// Fields whose draft value differs from the baseline, in submission order.
pub fn changed_fields(draft: &ProfileFields, baseline: &ProfileFields) -> Vec<ProfileField> {
    ProfileField::ALL
        .into_iter()
        .filter(|&field| draft.get(field) != baseline.get(field))
        .collect()
}
