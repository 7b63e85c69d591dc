//! Startup data for the activity directory.
//!
//! The directory is fixed at process start; this is the single place where
//! activities are defined. Construction is separate from request serving so
//! tests can build their own directories.

use crate::directory::ActivityDirectory;
use mhs_domain::activity::Activity;

/// Builds the seeded school activity directory.
#[must_use]
pub fn seed_directory() -> ActivityDirectory {
    ActivityDirectory::new([
        // Intellectual activities
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Prepare for and participate in math competitions",
                "Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["liam@mergington.edu", "ava@mergington.edu"]),
        ),
        (
            "Science Club",
            Activity::new(
                "Explore science topics and conduct experiments",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["noah@mergington.edu", "isabella@mergington.edu"]),
        ),
        // Sports related activities
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in local leagues",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                18,
            )
            .with_participants(["lucas@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Basketball Club",
            Activity::new(
                "Practice basketball and play friendly matches",
                "Fridays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["ethan@mergington.edu", "amelia@mergington.edu"]),
        ),
        (
            "Swimming Team",
            Activity::new(
                "Train and compete in swimming events",
                "Mondays and Wednesdays, 5:00 PM - 6:00 PM",
                12,
            )
            .with_participants(["jack@mergington.edu", "charlotte@mergington.edu"]),
        ),
        // Artistic activities
        (
            "Art Club",
            Activity::new(
                "Explore different art techniques and create your own masterpieces",
                "Thursdays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(["grace@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Drama Society",
            Activity::new(
                "Act, direct, and produce school plays and performances",
                "Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "logan@mergington.edu"]),
        ),
        (
            "Photography Club",
            Activity::new(
                "Learn photography skills and participate in photo walks",
                "Tuesdays, 3:30 PM - 5:00 PM",
                10,
            )
            .with_participants(["zoe@mergington.edu", "henry@mergington.edu"]),
        ),
        (
            "Music Band",
            Activity::new(
                "Play instruments and perform as part of the school band",
                "Fridays, 2:00 PM - 3:30 PM",
                12,
            )
            .with_participants(["lucy@mergington.edu", "william@mergington.edu"]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_the_full_directory() {
        let dir = seed_directory();
        assert_eq!(dir.len(), 12);
        assert!(dir.contains("Chess Club"));
        assert!(dir.contains("Music Band"));
    }

    #[test]
    fn every_seeded_activity_starts_below_capacity() {
        let dir = seed_directory();
        for (name, activity) in dir.snapshot() {
            assert!(!activity.is_full(), "{name} should have open spots at startup");
            assert_eq!(activity.participants.len(), 2, "{name} seeds two participants");
        }
    }
}
