pub mod aggregate;
pub mod classify;
pub mod error;
pub mod model;
pub mod normalize;
pub mod objects;
pub mod taxonomy;
pub mod trace;

use aggregate::FormReport;
use classify::{CoObjectClassifier, FallbackLogger, TracingLogger};
use error::PozhstatError;
use model::{FormId, IncidentRecord};
use std::path::Path;

pub use classify::Form7CoObjectRows;
pub use normalize::normalize_incident_victim_value;

/// Main API entry point: aggregate incident records into one report form.
///
/// Form 7 uses the built-in Form-4 classifier and reports object-code
/// fallbacks through `tracing`.
pub fn aggregate(form: FormId, records: &[IncidentRecord]) -> FormReport {
    aggregate_with(form, records, CoObjectClassifier::builtin(), &TracingLogger)
}

/// Aggregate with an explicit object classifier and fallback logger.
///
/// The classifier and logger are only consulted for form 7.
pub fn aggregate_with(
    form: FormId,
    records: &[IncidentRecord],
    classifier: &CoObjectClassifier,
    logger: &dyn FallbackLogger,
) -> FormReport {
    match form {
        FormId::Form5 => aggregate::aggregate_form5(records),
        FormId::Form7 => aggregate::aggregate_form7(records, classifier, logger),
    }
}

/// Read incident records from a JSON file holding an array of records.
pub fn load_records(path: &Path) -> Result<Vec<IncidentRecord>, PozhstatError> {
    let bytes = std::fs::read(path)?;
    parse_records(&bytes)
}

pub fn parse_records(json: &[u8]) -> Result<Vec<IncidentRecord>, PozhstatError> {
    let records: Vec<IncidentRecord> = serde_json::from_slice(json)?;
    Ok(records)
}
