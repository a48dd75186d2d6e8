pub mod gen_table;
pub mod get;
pub mod list;
pub mod raise;

use anyhow::Result;
use rlimctl_core::limits;

/// Resolve a `-r` argument into a display label and a resource id.
///
/// Accepts a limit name in either spelling or a raw numeric id; a raw id
/// that maps back to a known limit picks up that limit's short name.
pub(crate) fn resolve_resource(arg: &str) -> Result<(String, libc::c_int)> {
    let resource = limits::resolve(arg)?;
    let label = limits::by_resource(resource)
        .map(|limit| limit.short_name().to_string())
        .unwrap_or_else(|| resource.to_string());
    Ok((label, resource))
}
