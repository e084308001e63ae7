//! Derivation of notification alerts from ledger entries.
//!
//! Alerts are never persisted: each one is a read-time projection of a
//! ledger row plus its entry in the read-state set. Classification and
//! urgency are pure functions of the row's priority.

use serde::Serialize;

use crate::priority::PriorityLevel;
use crate::types::{DbId, Timestamp};

/// Classification bucket of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertClass {
    /// High-priority change ("Alta").
    Alerta,
    /// Informational change ("Baixa" or no priority).
    Info,
    /// Medium-priority change awaiting confirmation ("Média").
    Confirmacao,
}

impl AlertClass {
    /// Map a ledger entry's priority onto its classification bucket.
    pub fn from_priority(priority: Option<PriorityLevel>) -> Self {
        match priority {
            Some(PriorityLevel::High) => Self::Alerta,
            Some(PriorityLevel::Medium) => Self::Confirmacao,
            Some(PriorityLevel::Low) | None => Self::Info,
        }
    }
}

/// A derived, non-persisted notification view of a ledger entry.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    /// Globally unique ledger row id (shared sequence across kinds).
    pub id: DbId,
    pub titulo: String,
    pub descricao: String,
    /// Human-readable age bucket, e.g. "3 horas atrás".
    pub tempo: String,
    pub tipo: AlertClass,
    pub urgente: bool,
    pub lida: bool,
}

/// Source data for one alert, as fetched from the ledger and read-state set.
#[derive(Debug, Clone)]
pub struct AlertSource {
    pub row_id: DbId,
    pub titulo: String,
    pub descricao: String,
    pub priority: Option<PriorityLevel>,
    pub modified_at: Timestamp,
    pub read: bool,
}

/// Derive the alert view of a ledger entry.
pub fn derive_alert(source: &AlertSource, now: Timestamp) -> Alert {
    Alert {
        id: source.row_id,
        titulo: source.titulo.clone(),
        descricao: source.descricao.clone(),
        tempo: format_time_ago(source.modified_at, now),
        tipo: AlertClass::from_priority(source.priority),
        urgente: source.priority == Some(PriorityLevel::High),
        lida: source.read,
    }
}

/// Aggregate counters over the current alert set.
///
/// Always recomputed from the full set after every mutation; never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlertCounters {
    pub nao_lidas: usize,
    pub alertas: usize,
    pub informacoes: usize,
    pub confirmacoes: usize,
}

impl AlertCounters {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        Self {
            nao_lidas: alerts.iter().filter(|a| !a.lida).count(),
            alertas: alerts.iter().filter(|a| a.tipo == AlertClass::Alerta).count(),
            informacoes: alerts.iter().filter(|a| a.tipo == AlertClass::Info).count(),
            confirmacoes: alerts
                .iter()
                .filter(|a| a.tipo == AlertClass::Confirmacao)
                .count(),
        }
    }
}

/// Bucket an elapsed duration into "N dia(s)/hora(s)/minuto(s) atrás".
///
/// Floor division; anything under an hour lands in the minutes bucket,
/// down to "0 minuto atrás". A clock skew putting `then` in the future
/// clamps to zero.
pub fn format_time_ago(then: Timestamp, now: Timestamp) -> String {
    let secs = (now - then).num_seconds().max(0);
    let mins = secs / 60;
    let hours = secs / 3600;
    let days = secs / 86_400;

    if days > 0 {
        format!("{days} dia{} atrás", plural(days))
    } else if hours > 0 {
        format!("{hours} hora{} atrás", plural(hours))
    } else {
        format!("{mins} minuto{} atrás", plural(mins))
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}
