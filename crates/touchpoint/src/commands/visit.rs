use std::path::Path;
use touchpoint_core::Visit;
use url::Url;

pub fn run(store: Option<&Path>, url: &str) -> anyhow::Result<()> {
    let url = Url::parse(url)?;
    let mut tracker = super::open_tracker(store)?;

    let output = match tracker.record_visit(&url) {
        Visit::NoParams => serde_json::json!({ "stored": "none" }),
        Visit::Event { slug } => serde_json::json!({ "stored": "event", "slug": slug }),
        Visit::Latest { path } => serde_json::json!({ "stored": "latest", "path": path }),
    };

    println!("{output}");
    Ok(())
}
