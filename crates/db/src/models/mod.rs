//! Row types and DTOs shared between repositories and the API layer.

pub mod dependency;
pub mod history;
pub mod notification;
pub mod record;
pub mod user;
