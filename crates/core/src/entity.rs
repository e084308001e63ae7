//! Canonical identification of tracked records: entity kinds and references.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The three tracked entity kinds, a closed set.
///
/// Every site that branches on kind (field schemas, slot encoding, display
/// labels) matches exhaustively so that adding a kind is a compile error
/// until every dispatch point is updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Audited SQL statements (`AUD_SQL`), keyed by `codsentenca`.
    SqlQuery,
    /// Audited reports (`AUD_REPORT`), keyed by numeric `id`.
    Report,
    /// Audited visual formulas (`AUD_FV`), keyed by numeric `id`.
    VisualFormula,
}

impl EntityKind {
    /// All kinds, in display order.
    pub const ALL: [EntityKind; 3] = [
        EntityKind::SqlQuery,
        EntityKind::Report,
        EntityKind::VisualFormula,
    ];

    /// Legacy source table name, also the display name in listings.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::SqlQuery => "AUD_SQL",
            Self::Report => "AUD_REPORT",
            Self::VisualFormula => "AUD_FV",
        }
    }

    /// Short wire code used in bulk-create payloads and insight routes.
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::SqlQuery => "sql",
            Self::Report => "report",
            Self::VisualFormula => "fv",
        }
    }

    /// Human-facing label for dashboard tiles.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::SqlQuery => "Consultas SQL",
            Self::Report => "Relatórios",
            Self::VisualFormula => "Fórmulas Visuais",
        }
    }

    /// Parse a kind from its table name or short code, case-insensitively.
    ///
    /// Accepts `AUD_SQL`/`sql`, `AUD_REPORT`/`report`, `AUD_FV`/`fv`.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.to_ascii_lowercase().as_str() {
            "aud_sql" | "sql" => Ok(Self::SqlQuery),
            "aud_report" | "report" => Ok(Self::Report),
            "aud_fv" | "fv" => Ok(Self::VisualFormula),
            _ => Err(CoreError::NotFound {
                entity: "EntityKind",
                id: value.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

// JSON payloads use the same vocabulary as query parameters: the kind
// serializes as its short code and parses anything `parse` accepts.
impl Serialize for EntityKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.short_code())
    }
}

impl<'de> Deserialize<'de> for EntityKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// A reference to one record in one of the three tracked kinds.
///
/// The identifier is opaque: a text statement code for [`EntityKind::SqlQuery`],
/// a stringified numeric id for the other kinds. Unique within a kind, never
/// across kinds. Two refs are equal iff both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind.table_name(), self.id)
    }
}
