//! Shared constants used across slices and the API surface.

/// OpenAPI tag for system endpoints (health, docs).
pub const SYSTEM_TAG: &str = "System";

/// OpenAPI tag for the activity directory endpoints.
pub const ACTIVITIES_TAG: &str = "Activities";

/// The only email domain accepted for signups.
pub const SCHOOL_DOMAIN: &str = "mergington.edu";
