//! Port type helpers for HTTP telemetry queries.
//!
//! Telemetry requests select ports by category through a query fragment such
//! as `port_type__in__1__2__4`. This crate provides:
//!
//! - [`PortType`]: the closed set of port categories and their codes
//! - [`build_filter`]: names to filter string, skipping unsupported names
//! - [`parse_filter`]: filter string back to port types
//!
//! | Port type  | Code |
//! |------------|------|
//! | legacy     | 1    |
//! | plane      | 2    |
//! | aggregated | 4    |

pub mod error;
pub mod filter;
pub mod logging;
mod port;

pub use error::ParseError;
pub use filter::{build_filter, parse_filter, CODE_DELIMITER, FILTER_PREFIX};
pub use port::PortType;
