use anyhow::{Result, bail};
use rlimctl_core::limits;

pub fn run() -> Result<()> {
    let known = limits::all();
    if known.is_empty() {
        bail!("no resource limits are known on this platform");
    }
    for limit in known {
        println!("{} ({})", limit.short_name(), limit.resource);
    }
    Ok(())
}
