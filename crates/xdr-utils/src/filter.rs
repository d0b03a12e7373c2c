//! Telemetry query filter for port types.
//!
//! The telemetry HTTP API selects ports through a query fragment of the form
//! `port_type__in__<code>__<code>...`, with codes in ascending order.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::{ParseError, PortType};

/// Prefix of every non-empty filter.
pub const FILTER_PREFIX: &str = "port_type__in__";

/// Separator between codes.
pub const CODE_DELIMITER: &str = "__";

/// Builds the port type filter for the given names.
///
/// Names are matched ignoring case. Unsupported names are logged and skipped,
/// duplicates collapse and the codes are sorted, so the result does not
/// depend on input order. Returns an empty string when no name is supported.
///
/// # Example
///
/// ```
/// use xdr_utils::build_filter;
///
/// assert_eq!(
///     build_filter(&["legacy", "aggregated", "plane"]),
///     "port_type__in__1__2__4"
/// );
/// assert_eq!(build_filter(&["bogus"]), "");
/// ```
pub fn build_filter<S: AsRef<str>>(port_types: &[S]) -> String {
    let mut codes = BTreeSet::new();

    for name in port_types.iter().map(AsRef::as_ref) {
        match PortType::from_name(name) {
            Some(port_type) => {
                codes.insert(port_type.code());
            }
            None => {
                warn!(
                    port_type = %name,
                    "Skipping Port type {}, it should be one of {:?}",
                    name,
                    PortType::supported_names()
                );
            }
        }
    }

    if codes.is_empty() {
        let input: Vec<&str> = port_types.iter().map(AsRef::as_ref).collect();
        warn!("No valid port types found in {:?}", input);
        return String::new();
    }

    let filter = format!(
        "{}{}",
        FILTER_PREFIX,
        codes.into_iter().collect::<Vec<_>>().join(CODE_DELIMITER)
    );
    debug!(%filter, "Built port type filter");
    filter
}

/// Decodes a filter produced by [`build_filter`] back into port types.
///
/// The empty string decodes to an empty list. Port types are returned in
/// the order their codes appear.
pub fn parse_filter(filter: &str) -> Result<Vec<PortType>, ParseError> {
    if filter.is_empty() {
        return Ok(Vec::new());
    }

    let codes = filter
        .strip_prefix(FILTER_PREFIX)
        .ok_or_else(|| ParseError::MissingPrefix(filter.to_string()))?;

    codes
        .split(CODE_DELIMITER)
        .map(|code| {
            PortType::from_code(code).ok_or_else(|| ParseError::UnknownCode(code.to_string()))
        })
        .collect()
}
