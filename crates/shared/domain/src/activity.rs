use serde::{Deserialize, Serialize};

/// A named extracurricular offering with a schedule, capacity, and roster.
///
/// The activity name itself is not part of the record; the directory keys
/// activities by name and names are immutable identifiers. `participants` is
/// the only field that changes after startup, and only through signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Activity {
    /// Free-text description shown to students.
    pub description: String,
    /// Free-text schedule; not machine-parsed.
    pub schedule: String,
    /// Roster capacity. Always positive.
    pub max_participants: usize,
    /// Enrolled student emails, in signup order, unique per activity.
    pub participants: Vec<String>,
}

impl Activity {
    /// Creates an activity with an empty roster.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replaces the roster. Intended for seed construction.
    #[must_use]
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` when the roster has reached capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    /// Returns `true` when `email` is already on the roster.
    #[must_use]
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of free roster slots.
    #[must_use]
    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_helpers() {
        let activity = Activity::new("Chess", "Fridays", 2)
            .with_participants(["michael@mergington.edu"]);

        assert!(!activity.is_full());
        assert_eq!(activity.spots_left(), 1);
        assert!(activity.has_participant("michael@mergington.edu"));
        assert!(!activity.has_participant("daniel@mergington.edu"));
    }

    #[test]
    fn full_roster_reports_no_spots() {
        let activity = Activity::new("Chess", "Fridays", 1)
            .with_participants(["michael@mergington.edu"]);

        assert!(activity.is_full());
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let activity = Activity::new("Chess", "Fridays", 12)
            .with_participants(["michael@mergington.edu"]);
        let json = serde_json::to_value(&activity).unwrap();

        assert_eq!(json["max_participants"], 12);
        assert_eq!(json["participants"][0], "michael@mergington.edu");
    }
}
