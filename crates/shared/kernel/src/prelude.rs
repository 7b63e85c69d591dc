//! Convenience re-exports for slice and app code.

pub use crate::config::{ConfigError, load_config};
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use mhs_domain::activity::Activity;
pub use mhs_domain::config::ApiConfig;
pub use mhs_domain::registry::{FeatureSlice, InitializedSlice};
