use std::path::Path;
use url::Url;

pub fn run(store: Option<&Path>, path: &str, urls: &[String]) -> anyhow::Result<()> {
    let tracker = super::open_tracker(store)?;

    for raw in urls {
        let target = Url::parse(raw)?;
        println!("{}", tracker.decorate(path, &target));
    }
    Ok(())
}
