pub mod error;
pub mod limits;
pub mod proc;
pub mod rlim;
pub mod table;

pub use error::{Error, LimitsError, ProcError, RlimError};
