//! Activities feature slice.
//!
//! Holds the in-memory activity directory, validates signups, and exposes the
//! listing and signup endpoints. State lives for the process lifetime; nothing
//! is persisted.

pub mod directory;
mod email;
mod error;
pub mod events;
pub mod routes;
mod seed;

pub use directory::ActivityDirectory;
pub use error::{ActivityError, ErrorDetail};
pub use events::SignupRecorded;
pub use seed::seed_directory;

use mhs_domain::activity::Activity;
use mhs_domain::registry::{FeatureSlice, InitializedSlice};
use mhs_event_bus::EventBus;
use std::any::Any;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Activities feature state: the directory plus the shared event bus.
#[derive(Debug)]
pub struct Activities {
    directory: ActivityDirectory,
    events: EventBus,
}

impl Activities {
    /// Wraps an existing directory. Tests use this to control the data set.
    #[must_use]
    pub fn new(directory: ActivityDirectory, events: EventBus) -> Self {
        Self { directory, events }
    }

    /// Snapshot of all activities and their rosters, keyed by name.
    #[must_use]
    pub fn list(&self) -> BTreeMap<String, Activity> {
        self.directory.snapshot()
    }

    /// Signs a student up and returns the confirmation message.
    ///
    /// # Errors
    /// Propagates the first failed validation from
    /// [`ActivityDirectory::signup`]; no state changes on failure.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String, ActivityError> {
        self.directory.signup(activity_name, email)?;

        debug!(activity = activity_name, email, "Student signed up");

        if let Err(e) = self.events.publish(SignupRecorded {
            activity: activity_name.to_owned(),
            email: email.to_owned(),
        }) {
            warn!(error = %e, "Failed to publish signup event");
        }

        Ok(format!("Signed up {email} for {activity_name}"))
    }

    /// Read access to the underlying directory.
    #[must_use]
    pub const fn directory(&self) -> &ActivityDirectory {
        &self.directory
    }
}

impl FeatureSlice for Activities {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the activities feature with the seeded directory.
///
/// # Errors
/// Infallible today; the signature leaves room for fallible slice setup.
pub fn init(events: &EventBus) -> Result<InitializedSlice, ActivityError> {
    let directory = seed::seed_directory();
    tracing::info!(activities = directory.len(), "Activities slice initialized");

    let slice = Activities::new(directory, events.clone());
    Ok(InitializedSlice::new(slice))
}
