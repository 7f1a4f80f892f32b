//! Visit path classification

use regex::Regex;
use std::sync::OnceLock;

static EVENT_PATH_RE: OnceLock<Regex> = OnceLock::new();

fn event_path_re() -> &'static Regex {
    EVENT_PATH_RE.get_or_init(|| Regex::new(r"^/events/([^/]+)/?$").unwrap())
}

/// Where a visit landed: a single event's detail page, or anything else
/// (home, listing, tour pages). Both `Tracker::record_visit` and
/// `Tracker::resolve` consume this, so the path pattern lives in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    Event { slug: String },
    Other { path: String },
}

impl PageKind {
    /// Classify a URL path. Matches `/events/{slug}` with an optional
    /// trailing slash and no further segments.
    pub fn classify(path: &str) -> Self {
        match event_path_re().captures(path) {
            Some(caps) => PageKind::Event {
                slug: caps[1].to_string(),
            },
            None => PageKind::Other {
                path: path.to_string(),
            },
        }
    }

    pub fn is_event_path(path: &str) -> bool {
        event_path_re().is_match(path)
    }

    pub fn event_slug(&self) -> Option<&str> {
        match self {
            PageKind::Event { slug } => Some(slug),
            PageKind::Other { .. } => None,
        }
    }
}
