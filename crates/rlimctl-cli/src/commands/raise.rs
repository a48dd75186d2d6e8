#[cfg(target_os = "linux")]
use anyhow::Context;
use anyhow::Result;

#[cfg(target_os = "linux")]
pub fn run(pid: libc::pid_t, resource: &str, tree: bool) -> Result<()> {
    use rlimctl_core::{proc, rlim};
    use tracing::{info, warn};

    let (label, res) = super::resolve_resource(resource)?;

    let pids = if tree { proc::descendants(pid)? } else { vec![pid] };

    for target in pids {
        match rlim::raise_to_hard(target, res) {
            Ok((lim, true)) => {
                info!(
                    pid = target,
                    "raised {label} soft limit to {}",
                    rlim::display(lim.hard)
                );
            }
            Ok((lim, false)) => {
                info!(
                    pid = target,
                    "{label} soft limit already at hard limit ({})",
                    rlim::display(lim.hard)
                );
            }
            // a descendant may have exited mid-walk or belong to another
            // user; keep going for the rest of the tree
            Err(err) if tree && target != pid => {
                warn!(pid = target, "skipping: {err}");
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to raise {label} limit of pid {target}"));
            }
        }
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn run(_pid: libc::pid_t, _resource: &str, _tree: bool) -> Result<()> {
    anyhow::bail!("raise requires prlimit(2), which is Linux-only")
}
