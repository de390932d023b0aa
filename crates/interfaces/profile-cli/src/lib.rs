pub mod commands;

use anyhow::Result;
use camino::Utf8PathBuf;
use profile_app_core::JsonCustomerStore;

/// Opens the store at `path`, or the platform default when none is given.
pub fn open_store(path: Option<Utf8PathBuf>) -> Result<JsonCustomerStore> {
    match path {
        Some(p) => Ok(JsonCustomerStore::new(p.into_std_path_buf())),
        None => JsonCustomerStore::default_location(),
    }
}

/// Field edits requested on the command line. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct FieldEdits {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
