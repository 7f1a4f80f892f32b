//! UTM attribution capture and resolution for outbound ticket links

mod clock;
mod decorate;
mod page;
mod params;
mod tracker;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use decorate::decorate_url;
pub use page::PageKind;
pub use params::{UtmParams, UTM_PARAMS};
pub use tracker::{Tracker, Visit};
pub use types::{EventRecord, LatestRecord, StoreState};
