use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("limits error: {0}")]
    Limits(#[from] LimitsError),

    #[error("rlimit error: {0}")]
    Rlim(#[from] RlimError),

    #[error("proc error: {0}")]
    Proc(#[from] ProcError),
}

#[derive(Error, Debug)]
pub enum LimitsError {
    #[error("unknown resource limit: {name}")]
    UnknownLimit { name: String },

    #[error("platform exposes no RLIMIT_ constants")]
    Unsupported,
}

#[derive(Error, Debug)]
pub enum RlimError {
    #[error("getrlimit failed for resource {resource}: {source}")]
    Read {
        resource: libc::c_int,
        source: std::io::Error,
    },

    #[error("prlimit failed for pid {pid}, resource {resource}: {source}")]
    Remote {
        pid: libc::pid_t,
        resource: libc::c_int,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ProcError {
    #[error("no such process: {pid}")]
    NoSuchProcess { pid: libc::pid_t },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed status file {path}: missing or invalid PPid line")]
    BadStatus { path: String },
}
