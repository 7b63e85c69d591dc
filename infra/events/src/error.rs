use std::borrow::Cow;

/// Event bus error type.
#[derive(Debug, thiserror::Error)]
pub enum EventBusError {
    #[error("Event type mismatch: {0}")]
    TypeMismatch(Cow<'static, str>),
    #[error("Invalid channel capacity: {0}")]
    InvalidCapacity(Cow<'static, str>),
}
