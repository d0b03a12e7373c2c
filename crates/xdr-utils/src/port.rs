//! Port type definitions used by the telemetry port filter.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a network port as understood by the telemetry service.
///
/// Each variant carries a fixed numeric code, encoded as a string because it
/// is only ever embedded into query filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    /// Regular front-panel port.
    Legacy,
    /// Single plane of a multi-plane port.
    Plane,
    /// Aggregated port spanning several planes.
    Aggregated,
}

impl PortType {
    /// All port types in definition order.
    pub const ALL: [PortType; 3] = [PortType::Legacy, PortType::Plane, PortType::Aggregated];

    /// Symbolic (upper-case) name of the variant.
    const fn symbol(&self) -> &'static str {
        match self {
            PortType::Legacy => "LEGACY",
            PortType::Plane => "PLANE",
            PortType::Aggregated => "AGGREGATED",
        }
    }

    /// Lower-case name of the variant.
    pub const fn name(&self) -> &'static str {
        match self {
            PortType::Legacy => "legacy",
            PortType::Plane => "plane",
            PortType::Aggregated => "aggregated",
        }
    }

    /// Numeric telemetry code of the variant.
    pub const fn code(&self) -> &'static str {
        match self {
            PortType::Legacy => "1",
            PortType::Plane => "2",
            PortType::Aggregated => "4",
        }
    }

    /// Looks up a port type by name, ignoring case.
    ///
    /// Returns `None` when the name is not supported.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.into_iter().find(|t| t.symbol() == upper)
    }

    /// Looks up a port type by its numeric code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Lower-case names of all port types, in definition order.
    pub fn supported_names() -> Vec<&'static str> {
        Self::ALL.iter().map(PortType::name).collect()
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PortType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError::UnsupportedPortType {
            name: s.to_string(),
            supported: Self::supported_names(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_name_ignores_case() {
        for name in ["legacy", "Legacy", "LEGACY", "lEgAcY"] {
            assert_eq!(PortType::from_name(name), Some(PortType::Legacy));
        }
        assert_eq!(PortType::from_name("PLANE"), Some(PortType::Plane));
        assert_eq!(PortType::from_name("Aggregated"), Some(PortType::Aggregated));
    }

    #[test]
    fn test_from_name_unsupported() {
        assert_eq!(PortType::from_name("bogus"), None);
        assert_eq!(PortType::from_name(""), None);
        assert_eq!(PortType::from_name(" legacy"), None);
        assert_eq!(PortType::from_name("1"), None);
    }

    #[test]
    fn test_codes() {
        assert_eq!(PortType::Legacy.code(), "1");
        assert_eq!(PortType::Plane.code(), "2");
        assert_eq!(PortType::Aggregated.code(), "4");
        assert_eq!(PortType::from_code("4"), Some(PortType::Aggregated));
        assert_eq!(PortType::from_code("3"), None);
    }

    #[test]
    fn test_supported_names() {
        assert_eq!(
            PortType::supported_names(),
            vec!["legacy", "plane", "aggregated"]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("plane".parse::<PortType>().unwrap(), PortType::Plane);
        let err = "lag".parse::<PortType>().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedPortType {
                name: "lag".to_string(),
                supported: vec!["legacy", "plane", "aggregated"],
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PortType::Aggregated.to_string(), "aggregated");
    }
}
