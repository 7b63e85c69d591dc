//! Facade crate for `MergingtonHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register feature slices; extend as new slices appear.

use mhs_domain::config::ApiConfig;
use mhs_event_bus::EventBus;

pub use mhs_domain as domain;
pub use mhs_kernel as kernel;

pub mod server {
    pub mod router {
        pub use mhs_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use mhs_activities as activities;

    /// Enabled feature slices.
    pub const ENABLED: &[&str] = &["activities"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    _config: &ApiConfig,
    events: &EventBus,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Activity directory
    slices.push(features::activities::init(events)?);

    Ok(slices)
}
