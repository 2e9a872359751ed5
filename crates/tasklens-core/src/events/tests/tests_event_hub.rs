//! Tests for EventHub

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::events::{EventHub, HostEvent};

fn recorder() -> (Arc<Mutex<Vec<HostEvent>>>, impl FnMut(&HostEvent) + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |event: &HostEvent| sink.lock().unwrap().push(event.clone()))
}

#[test]
fn test_publish_reaches_subscribers() {
    let mut hub = EventHub::new();
    let (seen, callback) = recorder();
    hub.subscribe(callback);

    hub.publish(&HostEvent::WorkspaceOpened);
    hub.publish(&HostEvent::FileSaved(PathBuf::from("a.cpp")));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            HostEvent::WorkspaceOpened,
            HostEvent::FileSaved(PathBuf::from("a.cpp"))
        ]
    );
}

#[test]
fn test_subscribers_called_in_order() {
    let mut hub = EventHub::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    for name in ["first", "second"] {
        let order = Arc::clone(&order);
        hub.subscribe(move |_| order.lock().unwrap().push(name));
    }

    hub.publish(&HostEvent::ActiveProjectChanged);

    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut hub = EventHub::new();
    let (seen, callback) = recorder();
    let id = hub.subscribe(callback);

    assert!(hub.unsubscribe(id));
    assert!(!hub.unsubscribe(id));
    hub.publish(&HostEvent::WorkspaceClosed);

    assert!(seen.lock().unwrap().is_empty());
    assert!(hub.is_empty());
}

#[test]
fn test_subscription_ids_are_unique() {
    let mut hub = EventHub::new();

    let a = hub.subscribe(|_| {});
    let b = hub.subscribe(|_| {});

    assert_ne!(a, b);
    assert_eq!(hub.len(), 2);
}

#[test]
fn test_only_workspace_closed_clears() {
    assert!(HostEvent::WorkspaceClosed.clears());
    assert!(!HostEvent::WorkspaceOpened.clears());
    assert!(!HostEvent::ProjectRemoved("p".to_string()).clears());
    assert!(!HostEvent::FileDeleted(PathBuf::from("x.c")).clears());
}
