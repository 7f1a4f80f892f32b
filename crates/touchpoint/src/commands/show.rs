use std::path::Path;

pub fn run(store: Option<&Path>) -> anyhow::Result<()> {
    let tracker = super::open_tracker(store)?;
    println!("{}", serde_json::to_string_pretty(&tracker.state())?);
    Ok(())
}
