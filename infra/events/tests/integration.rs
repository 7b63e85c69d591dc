use mhs_event_bus::{EventBus, EventBusError};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Ping(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pong(u64);

#[tokio::test]
async fn broadcast_reaches_all_subscribers() {
    let bus = EventBus::new();
    let mut first = bus.subscribe::<Ping>().unwrap();
    let mut second = bus.subscribe::<Ping>().unwrap();

    let delivered = bus.publish(Ping(42)).unwrap();
    assert_eq!(delivered, 2);

    assert_eq!(first.recv().await.unwrap(), Arc::new(Ping(42)));
    assert_eq!(second.recv().await.unwrap(), Arc::new(Ping(42)));
}

#[tokio::test]
async fn publish_without_subscribers_is_dropped() {
    let bus = EventBus::new();
    assert_eq!(bus.publish(Ping(1)).unwrap(), 0);
}

#[tokio::test]
async fn channels_are_isolated_by_type() {
    let bus = EventBus::new();
    let mut pings = bus.subscribe::<Ping>().unwrap();
    let mut pongs = bus.subscribe::<Pong>().unwrap();

    bus.publish(Ping(1)).unwrap();
    bus.publish(Pong(2)).unwrap();

    assert_eq!(pings.recv().await.unwrap().0, 1);
    assert_eq!(pongs.recv().await.unwrap().0, 2);
}

#[test]
fn zero_capacity_is_rejected() {
    let bus = EventBus::new();
    let err = bus.subscribe_with_capacity::<Ping>(0).unwrap_err();
    assert!(matches!(err, EventBusError::InvalidCapacity(_)));
}

#[test]
fn shutdown_closes_channels() {
    let bus = EventBus::new();
    let _rx = bus.subscribe::<Ping>().unwrap();
    let _rx2 = bus.subscribe::<Pong>().unwrap();

    assert_eq!(bus.shutdown(), 2);
    assert_eq!(bus.shutdown(), 0);
}

#[tokio::test]
async fn clones_share_the_channel_table() {
    let bus = EventBus::new();
    let clone = bus.clone();
    let mut rx = bus.subscribe::<Ping>().unwrap();

    clone.publish(Ping(7)).unwrap();
    assert_eq!(rx.recv().await.unwrap().0, 7);
}
