use std::fmt;

use async_trait::async_trait;
use profile_core::{ProfileFields, UpdateOperation};

/// Supplies the current customer record used as the form's baseline.
pub trait CurrentUserSource: Send + Sync + 'static {
    fn load(&self) -> anyhow::Result<ProfileFields>;
}

/// The customer update mutation.
///
/// `Error` is opaque to the form: a rejection is stored as-is and handed to
/// the error display unchanged.
#[async_trait]
pub trait CustomerUpdater: Send + Sync + 'static {
    type Error: Clone + fmt::Debug + Send + Sync + 'static;

    async fn update_customer(&self, actions: Vec<UpdateOperation>) -> Result<(), Self::Error>;
}
