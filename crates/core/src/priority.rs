//! Priority levels for dependency edges and ledger classification.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Ordered priority level ("Alta" > "Média" > "Baixa").
///
/// An unset priority is represented as `Option::<PriorityLevel>::None` and is
/// distinct from every level; listings can filter on "no priority set"
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Baixa")]
    Low,
}

impl PriorityLevel {
    /// All levels, highest first (dashboard ordering).
    pub const ALL: [PriorityLevel; 3] = [
        PriorityLevel::High,
        PriorityLevel::Medium,
        PriorityLevel::Low,
    ];

    /// Stored/displayed string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Média",
            Self::Low => "Baixa",
        }
    }

    /// Parse a stored priority string. `None`/empty maps to no priority at
    /// the call sites; this parses only the three concrete levels.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "Alta" => Ok(Self::High),
            "Média" => Ok(Self::Medium),
            "Baixa" => Ok(Self::Low),
            other => Err(CoreError::Validation(format!(
                "Unknown priority level: {other}"
            ))),
        }
    }

    /// Parse an optional stored value, treating `None`, empty, and blank
    /// strings as "no priority set".
    pub fn parse_opt(value: Option<&str>) -> Result<Option<Self>, CoreError> {
        match value {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => Self::parse(s).map(Some),
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_round_trips_through_parse() {
        for level in PriorityLevel::ALL {
            assert_eq!(PriorityLevel::parse(level.as_str()).unwrap(), level);
        }
    }

    #[test]
    fn parse_rejects_unknown_level() {
        assert!(PriorityLevel::parse("Urgente").is_err());
    }

    #[test]
    fn parse_opt_treats_blank_as_unset() {
        assert_eq!(PriorityLevel::parse_opt(None).unwrap(), None);
        assert_eq!(PriorityLevel::parse_opt(Some("")).unwrap(), None);
        assert_eq!(PriorityLevel::parse_opt(Some("  ")).unwrap(), None);
        assert_eq!(
            PriorityLevel::parse_opt(Some("Baixa")).unwrap(),
            Some(PriorityLevel::Low)
        );
    }

    #[test]
    fn ordering_is_high_before_low() {
        assert!(PriorityLevel::High < PriorityLevel::Medium);
        assert!(PriorityLevel::Medium < PriorityLevel::Low);
    }

    #[test]
    fn serde_uses_portuguese_names() {
        let json = serde_json::to_string(&PriorityLevel::Medium).unwrap();
        assert_eq!(json, "\"Média\"");
        let parsed: PriorityLevel = serde_json::from_str("\"Alta\"").unwrap();
        assert_eq!(parsed, PriorityLevel::High);
    }
}
