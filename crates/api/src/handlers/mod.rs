pub mod auth;
pub mod dependency;
pub mod history;
pub mod insights;
pub mod notification;
pub mod record;

use audhub_core::entity::EntityKind;
use audhub_core::error::CoreError;

use crate::error::AppError;

/// Parse an optional kind filter from a query value; an unknown kind is
/// a 400, not a 404. Blank values mean "no filter".
pub(crate) fn parse_kind_filter(value: Option<&str>) -> Result<Option<EntityKind>, AppError> {
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => EntityKind::parse(s)
            .map(Some)
            .map_err(|_| AppError::Core(CoreError::Validation(format!("Unknown kind: {s}")))),
    }
}
