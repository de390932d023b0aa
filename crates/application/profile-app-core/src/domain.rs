use profile_core::{
    build_update_actions, changed_fields, validate, ProfileField, ProfileFields, UpdateOperation,
    ValidationError,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValidity {
    /// Set once the user edits the field (or a save attempt reveals errors).
    pub touched: bool,
    pub error: Option<ValidationError>,
}

impl FieldValidity {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The error a form should render, hidden until the field is touched.
    pub fn visible_error(&self) -> Option<ValidationError> {
        if self.touched {
            self.error
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidity {
    pub email: FieldValidity,
    pub first_name: FieldValidity,
    pub last_name: FieldValidity,
}

impl FormValidity {
    /// Untouched validity for every field of `fields`.
    pub fn evaluate(fields: &ProfileFields) -> Self {
        let mut v = Self::default();
        for field in ProfileField::ALL {
            v.get_mut(field).error = validate(field, fields.get(field)).err();
        }
        v
    }

    pub fn get(&self, field: ProfileField) -> &FieldValidity {
        match field {
            ProfileField::Email => &self.email,
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
        }
    }

    pub fn get_mut(&mut self, field: ProfileField) -> &mut FieldValidity {
        match field {
            ProfileField::Email => &mut self.email,
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
        }
    }

    pub fn all_valid(&self) -> bool {
        ProfileField::ALL.iter().all(|&f| self.get(f).is_valid())
    }

    pub fn touch_all(&mut self) {
        for field in ProfileField::ALL {
            self.get_mut(field).touched = true;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    InFlight,
}

/// Why a save request did not reach the updater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Draft equals baseline.
    Unchanged,
    /// At least one field fails validation.
    Invalid,
    /// Another save is still waiting on the updater.
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult<E> {
    Succeeded,
    Failed(E),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome<E> {
    Skipped(SkipReason),
    Submitted(SubmissionResult<E>),
}

impl<E> SaveOutcome<E> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SaveOutcome::Submitted(_))
    }
}

#[derive(Debug, Clone)]
pub struct FormState<E> {
    pub baseline: ProfileFields,
    pub draft: ProfileFields,
    pub validity: FormValidity,
    pub error: Option<E>,
    pub save: SaveStatus,
}

impl<E> FormState<E> {
    /// A freshly mounted form: draft equals baseline, nothing touched.
    pub fn seeded(baseline: ProfileFields) -> Self {
        Self {
            draft: baseline.clone(),
            validity: FormValidity::evaluate(&baseline),
            baseline,
            error: None,
            save: SaveStatus::Idle,
        }
    }

    pub fn has_changed(&self) -> bool {
        self.draft != self.baseline
    }

    pub fn is_saving(&self) -> bool {
        self.save == SaveStatus::InFlight
    }

    pub fn changed_fields(&self) -> Vec<ProfileField> {
        changed_fields(&self.draft, &self.baseline)
    }

    pub fn update_actions(&self) -> Vec<UpdateOperation> {
        build_update_actions(&self.draft, &self.baseline)
    }

    /// Checks the save preconditions in order.
    pub fn save_gate(&self) -> Result<(), SkipReason> {
        if self.is_saving() {
            return Err(SkipReason::InFlight);
        }
        if !self.has_changed() {
            return Err(SkipReason::Unchanged);
        }
        if !self.validity.all_valid() {
            return Err(SkipReason::Invalid);
        }
        Ok(())
    }
}
