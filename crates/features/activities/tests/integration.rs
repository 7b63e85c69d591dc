use mhs_activities::{Activities, ActivityError, SignupRecorded, init, seed_directory};
use mhs_domain::activity::Activity;
use mhs_event_bus::EventBus;

fn chess_slice(capacity: usize, participants: &[&str]) -> Activities {
    let directory = mhs_activities::ActivityDirectory::new([(
        "Chess Club",
        Activity::new("Chess", "Fridays", capacity).with_participants(participants.iter().copied()),
    )]);
    Activities::new(directory, EventBus::new())
}

#[test]
fn init_creates_slice() {
    let slice = init(&EventBus::new()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Activities>());
}

#[test]
fn valid_signup_appears_once_at_the_end() {
    let slice = chess_slice(12, &["michael@mergington.edu"]);

    let message = slice.signup("Chess Club", "ava@mergington.edu").unwrap();
    assert_eq!(message, "Signed up ava@mergington.edu for Chess Club");

    let roster = &slice.list()["Chess Club"].participants;
    assert_eq!(roster.last().map(String::as_str), Some("ava@mergington.edu"));
    assert_eq!(roster.iter().filter(|p| p.as_str() == "ava@mergington.edu").count(), 1);
}

#[test]
fn second_signup_for_same_email_fails_without_mutation() {
    let slice = chess_slice(12, &[]);

    slice.signup("Chess Club", "ava@mergington.edu").unwrap();
    let err = slice.signup("Chess Club", "ava@mergington.edu").unwrap_err();

    assert!(matches!(err, ActivityError::AlreadySignedUp));
    assert_eq!(slice.list()["Chess Club"].participants.len(), 1);
}

#[test]
fn signup_at_capacity_fails_without_mutation() {
    let slice = chess_slice(2, &["michael@mergington.edu", "daniel@mergington.edu"]);

    let err = slice.signup("Chess Club", "ava@mergington.edu").unwrap_err();

    assert!(matches!(err, ActivityError::Full));
    assert_eq!(slice.list()["Chess Club"].participants.len(), 2);
}

#[test]
fn malformed_and_foreign_emails_are_rejected() {
    let slice = chess_slice(12, &[]);

    assert!(matches!(
        slice.signup("Chess Club", "bob.edu").unwrap_err(),
        ActivityError::InvalidEmail
    ));
    assert!(matches!(
        slice.signup("Chess Club", "bob@other.edu").unwrap_err(),
        ActivityError::WrongDomain
    ));
    assert!(slice.list()["Chess Club"].participants.is_empty());
}

#[test]
fn unknown_activity_mutates_nothing() {
    let slice = chess_slice(12, &[]);

    let err = slice.signup("Chess Clubb", "ava@mergington.edu").unwrap_err();

    assert!(matches!(err, ActivityError::NotFound));
    assert!(slice.list()["Chess Club"].participants.is_empty());
}

#[tokio::test]
async fn successful_signup_publishes_an_event() {
    let events = EventBus::new();
    let mut rx = events.subscribe::<SignupRecorded>().unwrap();
    let slice = Activities::new(seed_directory(), events);

    slice.signup("Chess Club", "ava@mergington.edu").unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.activity, "Chess Club");
    assert_eq!(event.email, "ava@mergington.edu");
}

#[test]
fn failed_signup_publishes_no_event() {
    let events = EventBus::new();
    let mut rx = events.subscribe::<SignupRecorded>().unwrap();
    let slice = Activities::new(seed_directory(), events);

    slice.signup("Chess Club", "bob@other.edu").unwrap_err();

    assert!(rx.try_recv().is_err());
}
