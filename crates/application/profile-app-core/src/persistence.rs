use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use directories::ProjectDirs;
use profile_core::{validate, ProfileField, ProfileFields, UpdateOperation, ValidationError};

use crate::ports::{CurrentUserSource, CustomerUpdater};

/// Rejection returned by [`JsonCustomerStore`] when an update cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateRejected {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: ProfileField,
        reason: ValidationError,
    },
    #[error("customer record unavailable: {0}")]
    Storage(String),
}

/// Customer record kept as a JSON file. Serves as both the current-user
/// source and the update mutation.
#[derive(Debug, Clone)]
pub struct JsonCustomerStore {
    path: PathBuf,
}

impl JsonCustomerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store located in the platform config directory.
    pub fn default_location() -> Result<Self> {
        let proj_dirs = ProjectDirs::from(
            profile_config::QUALIFIER,
            profile_config::ORG,
            profile_config::APP,
        )
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(Self::new(
            proj_dirs.config_dir().join(profile_config::CUSTOMER_FILE_NAME),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, fields: &ProfileFields) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(fields)?;
        atomic_write(&self.path, json.as_bytes()).context("Failed to write customer record")?;
        Ok(())
    }

    fn apply_blocking(&self, actions: &[UpdateOperation]) -> Result<(), UpdateRejected> {
        for op in actions {
            if let Err(reason) = validate(op.field(), op.value()) {
                return Err(UpdateRejected::InvalidValue {
                    field: op.field(),
                    reason,
                });
            }
        }

        let mut record = self
            .load()
            .map_err(|e| UpdateRejected::Storage(format!("{e:#}")))?;
        for op in actions {
            record.apply(op);
        }
        self.save(&record)
            .map_err(|e| UpdateRejected::Storage(format!("{e:#}")))
    }
}

impl CurrentUserSource for JsonCustomerStore {
    fn load(&self) -> Result<ProfileFields> {
        if !self.path.exists() {
            anyhow::bail!("No customer record at {}", self.path.display());
        }
        let content = fs::read_to_string(&self.path).context("Failed to read customer record")?;
        let fields: ProfileFields = serde_json::from_str(&content)
            .with_context(|| format!("Malformed customer record {}", self.path.display()))?;
        Ok(fields)
    }
}

#[async_trait]
impl CustomerUpdater for JsonCustomerStore {
    type Error = UpdateRejected;

    async fn update_customer(&self, actions: Vec<UpdateOperation>) -> Result<(), UpdateRejected> {
        let store = self.clone();
        let res = tokio::task::spawn_blocking(move || store.apply_blocking(&actions))
            .await
            .map_err(|e| UpdateRejected::Storage(format!("update worker failed: {e}")))?;

        match &res {
            Ok(()) => tracing::debug!(path = %self.path.display(), "customer record updated"),
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "customer update refused"),
        }
        res
    }
}

fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp file {}", tmp_path.display()))?;
    file.write_all(contents)
        .with_context(|| format!("Failed to write temp file {}", tmp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync temp file {}", tmp_path.display()))?;
    drop(file);

    match fs::rename(&tmp_path, path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            fs::remove_file(path).ok();
            fs::rename(&tmp_path, path)
                .with_context(|| format!("Failed to replace destination file {}", path.display()))
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "Failed to rename temp file {} to {}",
                tmp_path.display(),
                path.display()
            )
        }),
    }
}
