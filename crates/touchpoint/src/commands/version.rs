pub fn run() -> anyhow::Result<()> {
    println!("touchpoint {}", env!("CARGO_PKG_VERSION"));
    println!("UTM attribution store for ticket purchase links");
    Ok(())
}
