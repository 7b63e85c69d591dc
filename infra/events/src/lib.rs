//! # Event Bus
//!
//! A type-safe, asynchronous broadcast bus connecting decoupled feature slices.
//!
//! Events are identified by their Rust type and fan out to every active
//! subscriber over `tokio` broadcast channels. Publishing with no subscribers
//! is not an error; the event is simply dropped.
//!
//! # Example
//!
//! ```rust
//! use mhs_event_bus::{EventBus, EventBusError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct SignupRecorded { email: String }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!
//!     let mut rx = bus.subscribe::<SignupRecorded>()?;
//!     bus.publish(SignupRecorded { email: "ava@mergington.edu".into() })?;
//!
//!     if let Ok(event) = rx.recv().await {
//!         assert_eq!(event.email, "ava@mergington.edu");
//!     }
//!     Ok(())
//! }
//! ```

mod bus;
mod error;

pub use bus::{Event, EventBus};
pub use error::EventBusError;
