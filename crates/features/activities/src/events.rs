//! Domain events published by the activities slice.

/// Emitted after a successful signup. Delivery is fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRecorded {
    /// Activity name the student enrolled in.
    pub activity: String,
    /// The enrolled student email.
    pub email: String,
}
