//! Centralized constants for paths, permissions, and wire details.

/// Default credential file, relative to the user's home directory.
pub const DEFAULT_EDGERC: &str = "~/.edgerc";

/// Section used when the caller does not name one.
pub const DEFAULT_SECTION: &str = "default";

/// Permission mode for the credential file.
pub const EDGERC_FILE_MODE: u32 = 0o600;

/// Fields every usable profile must carry, in validation order.
pub const REQUIRED_FIELDS: &[&str] = &["client_token", "client_secret", "access_token", "host"];

/// Field order written by `setup`.
pub const SETUP_FIELD_ORDER: &[&str] = &["client_secret", "host", "access_token", "client_token"];

/// Introspection endpoint used to verify a credential.
pub const VERIFY_PATH: &str = "/-/client-api/active-grants/implicit";

/// Scheme prefixed to hosts that carry none.
pub const DEFAULT_SCHEME: &str = "https://";

/// Path segment holding a grant's category in a scope token.
pub const SCOPE_CATEGORY_INDEX: usize = 5;

/// Path segment holding a grant's value in a scope token.
pub const SCOPE_VALUE_INDEX: usize = 7;

/// Authorization scheme emitted by the EdgeGrid signer.
pub const EDGEGRID_AUTH_SCHEME: &str = "EG1-HMAC-SHA256";
