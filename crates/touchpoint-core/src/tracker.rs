//! Visit persistence and attribution resolution

use crate::clock::Clock;
use crate::decorate::decorate_url;
use crate::page::PageKind;
use crate::params::UtmParams;
use crate::types::{EventRecord, LatestRecord, StoreState};
use touchpoint_store::BlobStore;
use url::Url;

/// Outcome of recording a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// No recognized parameters on the URL; the store was not touched.
    NoParams,
    /// Parameters were stored under the visited event's slug.
    Event { slug: String },
    /// Parameters were stored as the global latest record.
    Latest { path: String },
}

/// Attribution tracker bound to one storage slot and one time source.
pub struct Tracker<S: BlobStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: BlobStore, C: Clock> Tracker<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record one page visit.
    ///
    /// A visit without recognized parameters never touches the slot. With
    /// parameters, an event page writes its own record and a non-event page
    /// unconditionally replaces `latest`; the whole state is written back in
    /// one set. Storage failures are swallowed and logged, losing
    /// attribution must never break the visit itself.
    pub fn record_visit(&mut self, url: &Url) -> Visit {
        let params = UtmParams::from_url(url);
        if params.is_empty() {
            return Visit::NoParams;
        }

        let mut state = self.load_state();
        let timestamp = self.clock.now_ms();

        let visit = match PageKind::classify(url.path()) {
            PageKind::Event { slug } => {
                state
                    .events
                    .insert(slug.clone(), EventRecord { params, timestamp });
                Visit::Event { slug }
            }
            PageKind::Other { path } => {
                state.latest = Some(LatestRecord {
                    params,
                    path: path.clone(),
                    timestamp,
                });
                Visit::Latest { path }
            }
        };

        self.save_state(&state);
        visit
    }

    /// Resolve the attribution relevant to `path`.
    ///
    /// An event page prefers its own record. The latest record is only a
    /// fallback when it was captured on a non-event page, so attribution
    /// picked up while browsing one event never leaks onto another.
    pub fn resolve(&self, path: &str) -> Option<UtmParams> {
        let state = self.load_state();
        match PageKind::classify(path) {
            PageKind::Event { slug } => {
                if let Some(record) = state.events.get(&slug) {
                    return Some(record.params.clone());
                }
                state
                    .latest
                    .filter(|latest| !PageKind::is_event_path(&latest.path))
                    .map(|latest| latest.params)
            }
            PageKind::Other { .. } => state.latest.map(|latest| latest.params),
        }
    }

    /// Merge the attribution resolved for `page_path` into `target`. Returns
    /// the target unchanged when nothing resolves.
    pub fn decorate(&self, page_path: &str, target: &Url) -> Url {
        match self.resolve(page_path) {
            Some(params) => decorate_url(target, &params),
            None => target.clone(),
        }
    }

    /// Snapshot of the persisted state; empty when the slot is missing or
    /// unreadable.
    pub fn state(&self) -> StoreState {
        self.load_state()
    }

    fn load_state(&self) -> StoreState {
        match self.store.get() {
            Ok(blob) => StoreState::from_blob(blob.as_deref()),
            Err(err) => {
                tracing::debug!(error = %err, "attribution slot unreadable, treating as empty");
                StoreState::default()
            }
        }
    }

    fn save_state(&mut self, state: &StoreState) {
        let blob = match state.to_blob() {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize attribution state, dropping update");
                return;
            }
        };
        if let Err(err) = self.store.set(&blob) {
            tracing::warn!(error = %err, "failed to persist attribution, dropping update");
        }
    }
}
