//! Reading and writing resource limits via `getrlimit(2)` / `prlimit(2)`.
//!
//! Remote access to another process's limits rides on `prlimit(2)` and is
//! therefore Linux-only; reading the calling process's own limits works on
//! any Unix.

use std::io;
use std::mem::MaybeUninit;

use serde::Serialize;
#[cfg(target_os = "linux")]
use tracing::debug;

use crate::error::RlimError;

/// Soft/hard limit pair for one resource. `None` means `RLIM_INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rlimit {
    pub soft: Option<u64>,
    pub hard: Option<u64>,
}

impl Rlimit {
    fn from_raw(raw: libc::rlimit) -> Self {
        Self {
            soft: from_rlim_t(raw.rlim_cur),
            hard: from_rlim_t(raw.rlim_max),
        }
    }

    fn to_raw(self) -> libc::rlimit {
        libc::rlimit {
            rlim_cur: to_rlim_t(self.soft),
            rlim_max: to_rlim_t(self.hard),
        }
    }
}

fn from_rlim_t(value: libc::rlim_t) -> Option<u64> {
    (value != libc::RLIM_INFINITY).then_some(value as u64)
}

fn to_rlim_t(value: Option<u64>) -> libc::rlim_t {
    value.map_or(libc::RLIM_INFINITY, |v| v as libc::rlim_t)
}

/// Human-readable rendering of one limit value.
pub fn display(value: Option<u64>) -> String {
    value.map_or_else(|| "unlimited".to_string(), |v| v.to_string())
}

/// Read a limit for the calling process.
pub fn read_self(resource: libc::c_int) -> Result<Rlimit, RlimError> {
    let mut raw = MaybeUninit::<libc::rlimit>::uninit();
    let rc = unsafe { libc::getrlimit(resource as _, raw.as_mut_ptr()) };
    if rc != 0 {
        return Err(RlimError::Read {
            resource,
            source: io::Error::last_os_error(),
        });
    }
    Ok(Rlimit::from_raw(unsafe { raw.assume_init() }))
}

/// Read a limit for an arbitrary process. Pid 0 means the calling process.
#[cfg(target_os = "linux")]
pub fn read(pid: libc::pid_t, resource: libc::c_int) -> Result<Rlimit, RlimError> {
    let mut old = MaybeUninit::<libc::rlimit>::uninit();
    let rc = unsafe { libc::prlimit(pid, resource as _, std::ptr::null(), old.as_mut_ptr()) };
    if rc != 0 {
        return Err(RlimError::Remote {
            pid,
            resource,
            source: io::Error::last_os_error(),
        });
    }
    Ok(Rlimit::from_raw(unsafe { old.assume_init() }))
}

/// Replace a limit for an arbitrary process. Pid 0 means the calling process.
#[cfg(target_os = "linux")]
pub fn set(pid: libc::pid_t, resource: libc::c_int, new: Rlimit) -> Result<(), RlimError> {
    let raw = new.to_raw();
    let rc = unsafe { libc::prlimit(pid, resource as _, &raw, std::ptr::null_mut()) };
    if rc != 0 {
        return Err(RlimError::Remote {
            pid,
            resource,
            source: io::Error::last_os_error(),
        });
    }
    Ok(())
}

/// Raise a process's soft limit to its hard limit.
///
/// Returns the resulting pair and whether anything changed. Raising soft to
/// hard never needs privileges beyond those required to touch the target
/// process at all.
#[cfg(target_os = "linux")]
pub fn raise_to_hard(
    pid: libc::pid_t,
    resource: libc::c_int,
) -> Result<(Rlimit, bool), RlimError> {
    let current = read(pid, resource)?;
    if current.soft == current.hard {
        debug!(pid, resource, "soft already equals hard, nothing to do");
        return Ok((current, false));
    }
    let raised = Rlimit {
        soft: current.hard,
        hard: current.hard,
    };
    set(pid, resource, raised)?;
    debug!(pid, resource, "raised soft limit to hard limit");
    Ok((raised, true))
}
