use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use rlimctl_core::{limits, rlim};

pub fn run(pid: libc::pid_t, resource: Option<&str>, as_json: bool) -> Result<()> {
    let targets: Vec<(String, libc::c_int)> = match resource {
        Some(arg) => vec![super::resolve_resource(arg)?],
        None => limits::all()
            .iter()
            .map(|limit| (limit.short_name().to_string(), limit.resource))
            .collect(),
    };
    if targets.is_empty() {
        bail!("no resource limits are known on this platform");
    }

    let mut rows: Vec<(String, rlim::Rlimit)> = Vec::with_capacity(targets.len());
    for (name, res) in targets {
        let lim = read_for(pid, res)
            .with_context(|| format!("failed to read {name} limit of pid {pid}"))?;
        rows.push((name, lim));
    }

    if as_json {
        let map: BTreeMap<String, rlim::Rlimit> = rows.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for (name, lim) in rows {
            println!(
                "{:<12} soft={:<12} hard={}",
                name,
                rlim::display(lim.soft),
                rlim::display(lim.hard)
            );
        }
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn read_for(pid: libc::pid_t, resource: libc::c_int) -> Result<rlim::Rlimit> {
    Ok(rlim::read(pid, resource)?)
}

#[cfg(not(target_os = "linux"))]
fn read_for(pid: libc::pid_t, resource: libc::c_int) -> Result<rlim::Rlimit> {
    if pid != 0 {
        bail!("reading another process's limits requires prlimit(2), which is Linux-only");
    }
    Ok(rlim::read_self(resource)?)
}
