use super::outcome::{FormReport, RowCount};
use crate::classify::{CoObjectClassifier, FallbackLogger};
use crate::model::{FormId, IncidentRecord, VictimField, VictimOutcome, VictimRecord};
use crate::normalize::normalize_incident_victim_value;
use crate::taxonomy::{row_table, RowDef};
use crate::trace::{object_fallback_warning, unmapped_value_warning, RecordRef, TraceWarning};
use std::collections::HashMap;

/// Form 5: number of fires.
pub const FORM_5_FIRES_ROW: &str = "1";
/// Form 5: dead, total.
pub const FORM_5_DEAD_ROW: &str = "2";
/// Form 5: injured, total.
pub const FORM_5_INJURED_ROW: &str = "6";

/// Form 7: number of poisoning incidents.
pub const FORM_7_INCIDENTS_ROW: &str = "1";
/// Form 7: dead, total.
pub const FORM_7_DEAD_ROW: &str = "2";
/// Form 7: injured, total.
pub const FORM_7_INJURED_ROW: &str = "12";

const FORM_5_DEAD_FIELDS: [VictimField; 4] = [
    VictimField::SocialStatus,
    VictimField::Condition,
    VictimField::DeathCause,
    VictimField::DeathPlace,
];

const FORM_7_FIELDS: [VictimField; 2] = [VictimField::SocialStatus, VictimField::Condition];

/// Running counts for one form.
struct Tally {
    form: FormId,
    counts: HashMap<String, u64>,
    warnings: Vec<TraceWarning>,
}

impl Tally {
    fn new(form: FormId) -> Self {
        Self {
            form,
            counts: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    fn add(&mut self, row_id: &str) {
        *self.counts.entry(row_id.to_string()).or_insert(0) += 1;
    }

    /// Count the row a victim attribute maps to, if the form has one.
    fn add_attribute(
        &mut self,
        at: RecordRef<'_>,
        victim_index: usize,
        victim: &VictimRecord,
        field: VictimField,
    ) {
        let Some(table) = row_table(self.form, victim.outcome, field) else {
            return;
        };

        let raw = victim.value(field);
        let Some(key) = normalize_incident_victim_value(field, raw).filter(|k| !k.is_empty())
        else {
            return;
        };

        match table.get(key) {
            Some(row) => self.add(row),
            None => self.warnings.push(unmapped_value_warning(
                at,
                victim_index,
                victim.outcome,
                field,
                raw.unwrap_or_default(),
                key,
            )),
        }
    }

    fn finish(mut self, incidents: usize) -> FormReport {
        let def = self.form.rows();
        for row in &def.rows {
            roll_up(row, &mut self.counts);
        }

        let rows = def
            .walk()
            .into_iter()
            .map(|(row, depth)| RowCount {
                id: row.id.clone(),
                label: row.label.clone(),
                depth,
                count: self.counts.get(&row.id).copied().unwrap_or(0),
            })
            .collect();

        tracing::debug!(
            form = %self.form,
            incidents,
            warnings = self.warnings.len(),
            "aggregated report form"
        );

        FormReport {
            form: self.form,
            form_name: def.name.clone(),
            incidents,
            rows,
            warnings: self.warnings,
        }
    }
}

/// Fill header rows that were not counted directly with the sum of their children.
fn roll_up(row: &RowDef, counts: &mut HashMap<String, u64>) -> u64 {
    if row.children.is_empty() {
        return counts.get(&row.id).copied().unwrap_or(0);
    }

    let sum: u64 = row.children.iter().map(|c| roll_up(c, counts)).sum();
    *counts.entry(row.id.clone()).or_insert(sum)
}

/// Fold incident records into 1-СПЖС row counts.
///
/// Every incident counts as a fire. Dead victims count in the dead total and
/// in their social-status, condition, death-cause and death-place rows;
/// injured victims count in the injured total only.
pub fn aggregate_form5(records: &[IncidentRecord]) -> FormReport {
    let mut tally = Tally::new(FormId::Form5);

    for (incident_index, record) in records.iter().enumerate() {
        let at = RecordRef {
            incident_index,
            incident_id: record.id.as_deref(),
        };
        tally.add(FORM_5_FIRES_ROW);

        for (victim_index, victim) in record.victims.iter().enumerate() {
            match victim.outcome {
                VictimOutcome::Dead => {
                    tally.add(FORM_5_DEAD_ROW);
                    for field in FORM_5_DEAD_FIELDS {
                        tally.add_attribute(at, victim_index, victim, field);
                    }
                }
                VictimOutcome::Injured => tally.add(FORM_5_INJURED_ROW),
            }
        }
    }

    tally.finish(records.len())
}

/// Fold incident records into 7-CO row counts.
///
/// Each incident's object code is classified once; its victims count in the
/// dead or injured total, their social-status and condition rows, and the
/// object row matching their outcome.
pub fn aggregate_form7(
    records: &[IncidentRecord],
    classifier: &CoObjectClassifier,
    logger: &dyn FallbackLogger,
) -> FormReport {
    let mut tally = Tally::new(FormId::Form7);

    for (incident_index, record) in records.iter().enumerate() {
        let at = RecordRef {
            incident_index,
            incident_id: record.id.as_deref(),
        };
        tally.add(FORM_7_INCIDENTS_ROW);

        let object_rows = classifier.map_code_with(record.object_code.as_deref(), logger);
        if object_rows.fallback {
            tally.warnings.push(object_fallback_warning(
                at,
                record.object_code.as_deref(),
                object_rows,
            ));
        }

        for (victim_index, victim) in record.victims.iter().enumerate() {
            let (total_row, object_row) = match victim.outcome {
                VictimOutcome::Dead => (FORM_7_DEAD_ROW, object_rows.dead_row_id),
                VictimOutcome::Injured => (FORM_7_INJURED_ROW, object_rows.injured_row_id),
            };
            tally.add(total_row);
            tally.add(object_row);
            for field in FORM_7_FIELDS {
                tally.add_attribute(at, victim_index, victim, field);
            }
        }
    }

    tally.finish(records.len())
}
