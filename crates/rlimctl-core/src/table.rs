//! The constant-table generator.
//!
//! Renders the platform's `RLIMIT_*` constants as source-ready table
//! initializer lines, one per constant, sorted ascending by value:
//!
//! ```text
//!   "CPU", 0,
//!   "FSIZE", 1,
//! ```

use crate::error::LimitsError;
use crate::limits::{self, PREFIX};

/// Render the table body for every constant in the platform registry.
pub fn render() -> Result<String, LimitsError> {
    let pairs: Vec<(&str, i64)> = limits::all()
        .iter()
        .map(|limit| (limit.ident, limit.resource as i64))
        .collect();
    render_pairs(&pairs)
}

/// Render `  "NAME", value,` lines for every identifier carrying the
/// `RLIMIT_` prefix.
///
/// Identifiers without the prefix are filtered out. Rows sort by value
/// ascending; equal values (some platforms alias two identifiers to one
/// resource) fall back to identifier order so output stays deterministic.
/// Zero matching identifiers means the platform has no resource-limit
/// facility worth generating for, which is fatal.
pub fn render_pairs(pairs: &[(&str, i64)]) -> Result<String, LimitsError> {
    let mut rows: Vec<(&str, i64)> = pairs
        .iter()
        .filter_map(|&(ident, value)| ident.strip_prefix(PREFIX).map(|short| (short, value)))
        .collect();
    if rows.is_empty() {
        return Err(LimitsError::Unsupported);
    }
    rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    let mut out = String::new();
    for (short, value) in rows {
        out.push_str(&format!("  \"{short}\", {value},\n"));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_fixed_line_format() {
        let pairs = [
            ("RLIMIT_NOFILE", 7),
            ("RLIMIT_CPU", 0),
            ("RLIMIT_FSIZE", 1),
        ];
        let body = render_pairs(&pairs).expect("non-empty input renders");
        assert_eq!(body, "  \"CPU\", 0,\n  \"FSIZE\", 1,\n  \"NOFILE\", 7,\n");
    }

    #[test]
    fn identifiers_without_the_prefix_are_skipped() {
        let pairs = [("RLIMIT_CPU", 0), ("RUSAGE_SELF", 0), ("RLIM_NLIMITS", 16)];
        let body = render_pairs(&pairs).expect("one identifier matches");
        assert_eq!(body, "  \"CPU\", 0,\n");
    }

    #[test]
    fn zero_matching_identifiers_is_unsupported() {
        let err = render_pairs(&[]).expect_err("empty input must fail");
        assert!(matches!(err, LimitsError::Unsupported));

        let err = render_pairs(&[("RUSAGE_SELF", 0)]).expect_err("no prefix match must fail");
        assert!(matches!(err, LimitsError::Unsupported));
    }

    #[test]
    fn equal_values_order_by_identifier() {
        let pairs = [("RLIMIT_RSS", 5), ("RLIMIT_AS", 5)];
        let body = render_pairs(&pairs).expect("renders");
        assert_eq!(body, "  \"AS\", 5,\n  \"RSS\", 5,\n");
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    #[test]
    fn platform_table_has_one_line_per_registry_entry() {
        let body = render().expect("platform registry is populated");
        assert_eq!(body.lines().count(), limits::all().len());
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    #[test]
    fn platform_table_is_sorted_and_idempotent() {
        let body = render().expect("platform registry is populated");
        let values: Vec<i64> = body
            .lines()
            .map(|line| {
                line.trim_end_matches(',')
                    .rsplit(' ')
                    .next()
                    .expect("line has a value field")
                    .parse()
                    .expect("value field is decimal")
            })
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "not sorted: {body}");
        assert_eq!(body, render().expect("second run renders"));
    }
}
