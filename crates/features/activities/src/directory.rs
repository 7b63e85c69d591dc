use crate::email;
use crate::error::ActivityError;
use fxhash::FxHashMap;
use mhs_domain::activity::Activity;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// The full set of activities held by the service.
///
/// The map itself is immutable after construction; each roster sits behind its
/// own lock so concurrent signups to different activities never contend, while
/// the read-validate-append sequence for a single activity stays atomic.
#[derive(Debug, Default)]
pub struct ActivityDirectory {
    activities: FxHashMap<String, RwLock<Activity>>,
}

impl ActivityDirectory {
    /// Builds a directory from `(name, activity)` pairs.
    pub fn new<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        Self {
            activities: activities
                .into_iter()
                .map(|(name, activity)| (name.into(), RwLock::new(activity)))
                .collect(),
        }
    }

    /// Number of activities in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.activities.contains_key(name)
    }

    /// Returns a point-in-time copy of a single activity.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|activity| activity.read().clone())
    }

    /// Returns a point-in-time copy of every activity, keyed by name.
    ///
    /// Sorted map keeps the JSON object output deterministic.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities
            .iter()
            .map(|(name, activity)| (name.clone(), activity.read().clone()))
            .collect()
    }

    /// Signs a student up for an activity.
    ///
    /// Validation order is part of the API contract: unknown activity, then
    /// duplicate signup, then capacity, then email format, then email domain.
    /// The whole sequence runs under the activity's write lock, so capacity
    /// cannot be exceeded by concurrent requests.
    ///
    /// # Errors
    /// Returns the first failed validation; the roster is left untouched on
    /// any failure.
    pub fn signup(&self, name: &str, student_email: &str) -> Result<(), ActivityError> {
        let activity = self.activities.get(name).ok_or(ActivityError::NotFound)?;
        let mut activity = activity.write();

        if activity.has_participant(student_email) {
            return Err(ActivityError::AlreadySignedUp);
        }

        if activity.is_full() {
            return Err(ActivityError::Full);
        }

        email::validate(student_email)?;

        activity.participants.push(student_email.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> ActivityDirectory {
        ActivityDirectory::new([(
            "Chess Club",
            Activity::new("Chess", "Fridays", 3)
                .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        )])
    }

    #[test]
    fn signup_appends_in_order() {
        let dir = directory();
        dir.signup("Chess Club", "ava@mergington.edu").unwrap();

        let roster = dir.get("Chess Club").unwrap().participants;
        assert_eq!(roster.last().map(String::as_str), Some("ava@mergington.edu"));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn unknown_activity_is_not_found() {
        let err = directory().signup("Chess Clubb", "ava@mergington.edu").unwrap_err();
        assert!(matches!(err, ActivityError::NotFound));
    }

    #[test]
    fn duplicate_signup_is_rejected_before_capacity() {
        let dir = ActivityDirectory::new([(
            "Chess Club",
            Activity::new("Chess", "Fridays", 1).with_participants(["michael@mergington.edu"]),
        )]);

        // The roster is full *and* contains the email; the duplicate check wins.
        let err = dir.signup("Chess Club", "michael@mergington.edu").unwrap_err();
        assert!(matches!(err, ActivityError::AlreadySignedUp));
    }

    #[test]
    fn full_activity_rejects_new_signup() {
        let dir = ActivityDirectory::new([(
            "Chess Club",
            Activity::new("Chess", "Fridays", 2)
                .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        )]);

        let err = dir.signup("Chess Club", "ava@mergington.edu").unwrap_err();
        assert!(matches!(err, ActivityError::Full));

        let roster = dir.get("Chess Club").unwrap().participants;
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn capacity_is_checked_before_email_format() {
        let dir = ActivityDirectory::new([(
            "Chess Club",
            Activity::new("Chess", "Fridays", 1).with_participants(["michael@mergington.edu"]),
        )]);

        // A malformed email against a full activity reports "full".
        let err = dir.signup("Chess Club", "not-an-email").unwrap_err();
        assert!(matches!(err, ActivityError::Full));
    }

    #[test]
    fn failed_signup_leaves_roster_unchanged() {
        let dir = directory();
        let before = dir.get("Chess Club").unwrap();

        dir.signup("Chess Club", "bob@other.edu").unwrap_err();

        assert_eq!(dir.get("Chess Club").unwrap(), before);
    }

    #[test]
    fn snapshot_reflects_signups() {
        let dir = directory();
        dir.signup("Chess Club", "ava@mergington.edu").unwrap();

        let snapshot = dir.snapshot();
        let occurrences = snapshot["Chess Club"]
            .participants
            .iter()
            .filter(|p| p.as_str() == "ava@mergington.edu")
            .count();
        assert_eq!(occurrences, 1);
    }
}
