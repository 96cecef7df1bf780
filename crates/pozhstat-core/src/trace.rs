use crate::classify::Form7CoObjectRows;
use crate::model::{VictimField, VictimOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    Important,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceWarningKind {
    /// A non-empty attribute value has no row in the form.
    UnmappedValue,
    /// The object code was empty or unknown and went to the fallback rows.
    ObjectFallback,
}

/// Something an aggregation could not place precisely, kept for human review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceWarning {
    pub kind: TraceWarningKind,
    /// Position of the incident in the input.
    pub incident_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub victim_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<VictimField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub message: String,
    pub severity: TraceSeverity,
}

/// Location of a record inside the aggregated input.
#[derive(Debug, Clone, Copy)]
pub struct RecordRef<'a> {
    pub incident_index: usize,
    pub incident_id: Option<&'a str>,
}

pub fn unmapped_value_warning(
    at: RecordRef<'_>,
    victim_index: usize,
    outcome: VictimOutcome,
    field: VictimField,
    raw: &str,
    canonical: &str,
) -> TraceWarning {
    let message = if raw == canonical {
        format!("{outcome} victim {field} '{raw}' has no report row")
    } else {
        format!("{outcome} victim {field} '{raw}' (normalized '{canonical}') has no report row")
    };

    TraceWarning {
        kind: TraceWarningKind::UnmappedValue,
        incident_index: at.incident_index,
        incident_id: at.incident_id.map(str::to_string),
        victim_index: Some(victim_index),
        field: Some(field),
        value: Some(raw.to_string()),
        message,
        severity: TraceSeverity::Info,
    }
}

pub fn object_fallback_warning(
    at: RecordRef<'_>,
    code: Option<&str>,
    rows: Form7CoObjectRows,
) -> TraceWarning {
    let message = match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => format!(
            "object code '{}' is not in the Form-4 classifier, counted in rows {}/{}",
            c, rows.dead_row_id, rows.injured_row_id
        ),
        None => format!(
            "object code is missing, counted in rows {}/{}",
            rows.dead_row_id, rows.injured_row_id
        ),
    };

    TraceWarning {
        kind: TraceWarningKind::ObjectFallback,
        incident_index: at.incident_index,
        incident_id: at.incident_id.map(str::to_string),
        victim_index: None,
        field: None,
        value: code.map(str::to_string),
        message,
        severity: TraceSeverity::Important,
    }
}
