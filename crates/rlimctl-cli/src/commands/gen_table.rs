use anyhow::Result;
use rlimctl_core::table;

pub fn run() -> Result<()> {
    // Either the whole table renders or nothing is printed at all; a
    // partial table is useless to the downstream table-literal consumer.
    let body = table::render()?;
    print!("{body}");
    Ok(())
}
