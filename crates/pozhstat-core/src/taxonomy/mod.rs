pub mod forms;
pub mod tables;

use crate::model::{FormId, VictimField, VictimOutcome};

pub use forms::{FormDef, RowDef, FORM_5_ROWS, FORM_7_ROWS};

/// Read-only mapping from canonical attribute key to report row id.
///
/// A key missing from the table means the value contributes no row in this
/// form, not that the value is invalid.
#[derive(Debug, Clone, Copy)]
pub struct RowTable {
    pub form: FormId,
    pub outcome: VictimOutcome,
    pub field: VictimField,
    entries: &'static [(&'static str, &'static str)],
}

impl RowTable {
    pub const fn new(
        form: FormId,
        outcome: VictimOutcome,
        field: VictimField,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            form,
            outcome,
            field,
            entries,
        }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, row)| *row)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        let entries = self.entries;
        entries.iter().map(|(k, _)| *k)
    }

    pub fn row_ids(&self) -> impl Iterator<Item = &'static str> {
        let entries = self.entries;
        entries.iter().map(|(_, row)| *row)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pick the row table for a form, victim outcome and attribute dimension.
///
/// Form 5 breaks down dead victims only. Form 7 has no death-cause or
/// death-place breakdown.
pub fn row_table(
    form: FormId,
    outcome: VictimOutcome,
    field: VictimField,
) -> Option<&'static RowTable> {
    use tables::*;

    match (form, outcome, field) {
        (FormId::Form5, VictimOutcome::Dead, VictimField::SocialStatus) => {
            Some(&FORM_5_SOCIAL_STATUS_ROWS)
        }
        (FormId::Form5, VictimOutcome::Dead, VictimField::Condition) => {
            Some(&FORM_5_CONDITION_ROWS)
        }
        (FormId::Form5, VictimOutcome::Dead, VictimField::DeathCause) => {
            Some(&FORM_5_DEATH_CAUSE_ROWS)
        }
        (FormId::Form5, VictimOutcome::Dead, VictimField::DeathPlace) => {
            Some(&FORM_5_DEATH_PLACE_ROWS)
        }
        (FormId::Form7, VictimOutcome::Dead, VictimField::SocialStatus) => {
            Some(&FORM_7_DEAD_SOCIAL_STATUS_ROWS)
        }
        (FormId::Form7, VictimOutcome::Injured, VictimField::SocialStatus) => {
            Some(&FORM_7_INJURED_SOCIAL_STATUS_ROWS)
        }
        (FormId::Form7, VictimOutcome::Dead, VictimField::Condition) => {
            Some(&FORM_7_DEAD_CONDITION_ROWS)
        }
        (FormId::Form7, VictimOutcome::Injured, VictimField::Condition) => {
            Some(&FORM_7_INJURED_CONDITION_ROWS)
        }
        _ => None,
    }
}

/// Every attribute row table, in form order.
pub fn all_row_tables() -> [&'static RowTable; 8] {
    use tables::*;

    [
        &FORM_5_SOCIAL_STATUS_ROWS,
        &FORM_5_CONDITION_ROWS,
        &FORM_5_DEATH_CAUSE_ROWS,
        &FORM_5_DEATH_PLACE_ROWS,
        &FORM_7_DEAD_SOCIAL_STATUS_ROWS,
        &FORM_7_INJURED_SOCIAL_STATUS_ROWS,
        &FORM_7_DEAD_CONDITION_ROWS,
        &FORM_7_INJURED_CONDITION_ROWS,
    ]
}
