use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("xoltab version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
