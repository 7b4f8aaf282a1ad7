//! Secret manifest envelope constants.

/// `kind` of every generated manifest.
pub const SECRET_KIND: &str = "Secret";

/// `apiVersion` of every generated manifest.
pub const SECRET_API_VERSION: &str = "v1";

/// `type` of every generated manifest.
pub const SECRET_TYPE: &str = "Opaque";

/// Secret name substituted when the caller supplies an empty one.
pub const DEFAULT_SECRET_NAME: &str = "my-secret";

/// Namespace substituted when the caller supplies an empty one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Filename used for downloads when sanitization leaves nothing usable.
pub const FALLBACK_FILENAME: &str = "secret";
