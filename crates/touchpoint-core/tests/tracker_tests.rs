use touchpoint_core::{FixedClock, Tracker, UtmParams, Visit};
use touchpoint_store::{BlobStore, MemoryStore, StoreError};
use url::Url;

type TestTracker = Tracker<MemoryStore, FixedClock>;

fn tracker() -> TestTracker {
    Tracker::new(MemoryStore::new(), FixedClock(1_700_000_000_000))
}

fn visit(tracker: &mut TestTracker, raw: &str) {
    tracker.record_visit(&Url::parse(raw).unwrap());
}

fn params(pairs: &[(&str, &str)]) -> UtmParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_visit_without_params_leaves_store_untouched() {
    let mut tracker = tracker();
    visit(&mut tracker, "https://example.com/?utm_source=x");
    let before = tracker.store().blob().map(str::to_string);
    assert!(before.is_some(), "seeding visit should have written the slot");

    visit(&mut tracker, "https://example.com/events/abc");
    visit(&mut tracker, "https://example.com/about?page=2");
    assert_eq!(
        tracker.store().blob(),
        before.as_deref(),
        "a visit without recognized params must leave the slot byte-for-byte unchanged"
    );
}

#[test]
fn test_visit_without_params_writes_nothing_to_empty_store() {
    let mut tracker = tracker();
    visit(&mut tracker, "https://example.com/events/abc?ref=partner");
    assert_eq!(tracker.store().blob(), None);
}

#[test]
fn test_event_scoped_write_resolves_on_same_event() {
    let mut tracker = tracker();
    visit(&mut tracker, "https://example.com/events/abc?utm_source=x");

    assert_eq!(
        tracker.resolve("/events/abc"),
        Some(params(&[("utm_source", "x")]))
    );
    // trailing slash reaches the same record
    assert_eq!(
        tracker.resolve("/events/abc/"),
        Some(params(&[("utm_source", "x")]))
    );
}

#[test]
fn test_event_record_never_donates_to_other_event() {
    let mut tracker = tracker();
    visit(&mut tracker, "https://example.com/events/abc?utm_source=x");

    assert_eq!(
        tracker.resolve("/events/def"),
        None,
        "attribution captured on one event must not leak onto another"
    );
}

#[test]
fn test_neutral_page_fallback_reaches_unvisited_event() {
    let mut tracker = tracker();
    visit(&mut tracker, "https://example.com/?utm_source=x");

    assert_eq!(
        tracker.resolve("/events/def"),
        Some(params(&[("utm_source", "x")]))
    );
    assert_eq!(
        tracker.resolve("/about"),
        Some(params(&[("utm_source", "x")]))
    );
}

#[test]
fn test_own_record_beats_latest_fallback() {
    let mut tracker = tracker();
    visit(&mut tracker, "https://example.com/?utm_source=listing");
    visit(&mut tracker, "https://example.com/events/abc?utm_source=own");

    assert_eq!(
        tracker.resolve("/events/abc"),
        Some(params(&[("utm_source", "own")]))
    );
}

#[test]
fn test_overwrite_replaces_whole_record() {
    let mut tracker = tracker();
    visit(
        &mut tracker,
        "https://example.com/events/abc?utm_source=x&utm_medium=cpc",
    );
    visit(&mut tracker, "https://example.com/events/abc?utm_source=y");

    assert_eq!(
        tracker.resolve("/events/abc"),
        Some(params(&[("utm_source", "y")])),
        "a newer visit must replace the old record, not merge into it"
    );
}

#[test]
fn test_latest_is_overwritten_not_merged() {
    let mut tracker = tracker();
    visit(&mut tracker, "https://example.com/?utm_source=x&utm_term=old");
    visit(&mut tracker, "https://example.com/about?utm_campaign=spring");

    assert_eq!(
        tracker.resolve("/"),
        Some(params(&[("utm_campaign", "spring")]))
    );
}

#[test]
fn test_corrupt_slot_recovers_as_empty() {
    let store = MemoryStore::seeded("{\"events\": not json at all");
    let mut tracker = Tracker::new(store, FixedClock(1_700_000_000_000));

    assert_eq!(tracker.resolve("/events/abc"), None);
    assert_eq!(tracker.resolve("/"), None);

    // the next qualifying visit rebuilds the slot from the empty shape
    visit(&mut tracker, "https://example.com/?utm_source=x");
    assert_eq!(tracker.resolve("/"), Some(params(&[("utm_source", "x")])));
    assert!(tracker.state().events.is_empty());
}

#[test]
fn test_latest_from_event_path_is_rejected_as_fallback() {
    // Another writer may have stored a latest record from an event page;
    // such a record must not donate to a different event.
    let blob = serde_json::json!({
        "events": {},
        "latest": {
            "params": {"utm_source": "x"},
            "path": "/events/abc",
            "timestamp": 1_700_000_000_000i64
        }
    })
    .to_string();
    let tracker = Tracker::new(MemoryStore::seeded(blob), FixedClock(1_700_000_000_000));

    assert_eq!(tracker.resolve("/events/def"), None);
    // non-event pages still use it
    assert_eq!(tracker.resolve("/"), Some(params(&[("utm_source", "x")])));
}

#[test]
fn test_decoration_round_trip() {
    let mut tracker = tracker();
    visit(&mut tracker, "https://example.com/?utm_source=x");

    let target = Url::parse("https://ticket.example/buy?ref=1").unwrap();
    let decorated = tracker.decorate("/events/def", &target);
    assert_eq!(
        decorated.as_str(),
        "https://ticket.example/buy?ref=1&utm_source=x"
    );

    let again = tracker.decorate("/events/def", &decorated);
    assert_eq!(again.as_str(), decorated.as_str(), "decoration must be idempotent");
}

/// Slot that reads as empty but rejects every write, like a full disk.
struct FailingStore;

impl BlobStore for FailingStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&mut self, _blob: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        )))
    }
}

#[test]
fn test_failed_write_is_swallowed() {
    let mut tracker = Tracker::new(FailingStore, FixedClock(1_700_000_000_000));

    let visit = tracker.record_visit(&Url::parse("https://example.com/?utm_source=x").unwrap());
    assert_eq!(
        visit,
        Visit::Latest {
            path: "/".to_string()
        },
        "a storage failure must not change the visit outcome"
    );

    // the update was dropped, nothing resolves and nothing panicked
    assert_eq!(tracker.resolve("/"), None);
    assert_eq!(
        tracker.record_visit(&Url::parse("https://example.com/events/abc?utm_source=y").unwrap()),
        Visit::Event {
            slug: "abc".to_string()
        }
    );
}

#[test]
fn test_decorate_without_resolution_is_a_noop() {
    let tracker = tracker();
    let target = Url::parse("https://ticket.example/buy?ref=1").unwrap();
    assert_eq!(tracker.decorate("/events/def", &target).as_str(), target.as_str());
}
