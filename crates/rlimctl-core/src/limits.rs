use serde::Serialize;

use crate::error::LimitsError;

/// Identifier prefix shared by every resource-limit constant.
pub const PREFIX: &str = "RLIMIT_";

/// A resource limit known to the target platform.
///
/// The set of limits is a static registry gated by conditional compilation;
/// the kernel does not offer a way to enumerate them at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Limit {
    /// Full platform identifier, e.g. `RLIMIT_CPU`.
    pub ident: &'static str,
    /// Numeric resource id passed to `getrlimit(2)` / `prlimit(2)`.
    pub resource: libc::c_int,
}

impl Limit {
    /// Short name used in generated tables: the identifier with the literal
    /// `RLIMIT_` prefix removed.
    pub fn short_name(&self) -> &'static str {
        self.ident.strip_prefix(PREFIX).unwrap_or(self.ident)
    }
}

macro_rules! limit {
    ($ident:ident) => {
        Limit {
            ident: stringify!($ident),
            resource: libc::$ident as libc::c_int,
        }
    };
}

#[cfg(target_os = "linux")]
static LIMITS: &[Limit] = &[
    limit!(RLIMIT_CPU),
    limit!(RLIMIT_FSIZE),
    limit!(RLIMIT_DATA),
    limit!(RLIMIT_STACK),
    limit!(RLIMIT_CORE),
    limit!(RLIMIT_RSS),
    limit!(RLIMIT_NPROC),
    limit!(RLIMIT_NOFILE),
    limit!(RLIMIT_MEMLOCK),
    limit!(RLIMIT_AS),
    limit!(RLIMIT_LOCKS),
    limit!(RLIMIT_SIGPENDING),
    limit!(RLIMIT_MSGQUEUE),
    limit!(RLIMIT_NICE),
    limit!(RLIMIT_RTPRIO),
    limit!(RLIMIT_RTTIME),
];

#[cfg(target_os = "macos")]
static LIMITS: &[Limit] = &[
    limit!(RLIMIT_CPU),
    limit!(RLIMIT_FSIZE),
    limit!(RLIMIT_DATA),
    limit!(RLIMIT_STACK),
    limit!(RLIMIT_CORE),
    limit!(RLIMIT_AS),
    limit!(RLIMIT_MEMLOCK),
    limit!(RLIMIT_NPROC),
    limit!(RLIMIT_NOFILE),
];

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
static LIMITS: &[Limit] = &[];

/// All limits known on this platform, in registry order.
pub fn all() -> &'static [Limit] {
    LIMITS
}

/// Look up a limit by name, case-insensitively.
///
/// Accepts the short name (`core`) or the full identifier (`RLIMIT_CORE`).
pub fn by_name(name: &str) -> Result<Limit, LimitsError> {
    let upper = name.to_ascii_uppercase();
    let short = upper.strip_prefix(PREFIX).unwrap_or(&upper);
    LIMITS
        .iter()
        .copied()
        .find(|limit| limit.short_name() == short)
        .ok_or_else(|| LimitsError::UnknownLimit {
            name: name.to_string(),
        })
}

/// Look up a limit by its numeric resource id.
pub fn by_resource(resource: libc::c_int) -> Option<Limit> {
    LIMITS.iter().copied().find(|l| l.resource == resource)
}

/// Resolve a user-supplied resource argument: a limit name, or a raw
/// numeric resource id.
pub fn resolve(arg: &str) -> Result<libc::c_int, LimitsError> {
    match by_name(arg) {
        Ok(limit) => Ok(limit.resource),
        Err(err) => arg.parse::<libc::c_int>().map_err(|_| err),
    }
}
