//! Central configuration constants for the profile editor.

/// Address pattern used for the email field: `local@domain` where the domain
/// has at least one dot-separated label after the first.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$";

/// File name of the JSON customer record inside the config directory.
pub const CUSTOMER_FILE_NAME: &str = "customer.json";

/// `directories::ProjectDirs` triple.
pub const QUALIFIER: &str = "com";
pub const ORG: &str = "profile";
pub const APP: &str = "editor";

/// Shown when a required field is empty (or only whitespace).
pub const MSG_REQUIRED: &str = "This field is required";

/// Shown when the email does not look like an address.
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
