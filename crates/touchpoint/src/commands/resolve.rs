use std::path::Path;

pub fn run(store: Option<&Path>, path: &str, query: bool) -> anyhow::Result<()> {
    let tracker = super::open_tracker(store)?;

    match tracker.resolve(path) {
        Some(params) if query => println!("{}", params.to_query_string()),
        Some(params) => println!("{}", serde_json::to_string(&params)?),
        None if query => println!(),
        None => println!("null"),
    }
    Ok(())
}
