//! Canonical attribute key to row id tables for forms 5 and 7.

use super::RowTable;
use crate::model::{FormId, VictimField, VictimOutcome};

pub const FORM_5_SOCIAL_STATUS_ROWS: RowTable = RowTable::new(
    FormId::Form5,
    VictimOutcome::Dead,
    VictimField::SocialStatus,
    &[
        ("worker", "2.1.1"),
        ("employee", "2.1.2"),
        ("entrepreneur", "2.1.3"),
        ("unemployed", "2.1.4"),
        ("pensioner", "2.1.5"),
        ("child", "2.1.6"),
        ("student_7_10", "2.1.7.1"),
        ("student_10_16", "2.1.7.2"),
        ("student", "2.1.8"),
        ("homeless", "2.1.9"),
        ("disabled", "2.1.10"),
    ],
);

pub const FORM_5_CONDITION_ROWS: RowTable = RowTable::new(
    FormId::Form5,
    VictimOutcome::Dead,
    VictimField::Condition,
    &[
        ("alcohol", "3.1.1"),
        ("sleep", "3.1.2"),
        ("disability", "3.1.3"),
        ("unattended_children", "3.1.4"),
        ("panic", "3.1.5"),
        ("other", "3.1.6"),
    ],
);

pub const FORM_5_DEATH_CAUSE_ROWS: RowTable = RowTable::new(
    FormId::Form5,
    VictimOutcome::Dead,
    VictimField::DeathCause,
    &[
        ("high_temp", "4.1.1"),
        ("smoke", "4.1.2"),
        ("collapse", "4.1.3"),
        ("panic", "4.1.4"),
        ("gas_explosion", "4.1.5"),
        ("other", "4.1.6"),
    ],
);

pub const FORM_5_DEATH_PLACE_ROWS: RowTable = RowTable::new(
    FormId::Form5,
    VictimOutcome::Dead,
    VictimField::DeathPlace,
    &[
        ("on_site", "5.1.1"),
        ("en_route", "5.1.2"),
        ("hospital", "5.1.3"),
    ],
);

pub const FORM_7_DEAD_SOCIAL_STATUS_ROWS: RowTable = RowTable::new(
    FormId::Form7,
    VictimOutcome::Dead,
    VictimField::SocialStatus,
    &[
        ("worker", "2.1"),
        ("employee", "2.2"),
        ("entrepreneur", "2.3"),
        ("unemployed", "2.4"),
        ("pensioner", "2.5"),
        ("child", "2.6"),
        ("student_7_10", "2.7.1"),
        ("student_10_16", "2.7.2"),
        ("student", "2.8"),
        ("homeless", "2.9"),
        ("prisoner", "2.10"),
        ("disabled", "2.11"),
    ],
);

pub const FORM_7_INJURED_SOCIAL_STATUS_ROWS: RowTable = RowTable::new(
    FormId::Form7,
    VictimOutcome::Injured,
    VictimField::SocialStatus,
    &[
        ("worker", "12.1"),
        ("employee", "12.2"),
        ("entrepreneur", "12.3"),
        ("unemployed", "12.4"),
        ("pensioner", "12.5"),
        ("child", "12.6"),
        ("student_7_10", "12.7.1"),
        ("student_10_16", "12.7.2"),
        ("student", "12.8"),
        ("homeless", "12.9"),
        ("prisoner", "12.10"),
        ("disabled", "12.11"),
    ],
);

pub const FORM_7_DEAD_CONDITION_ROWS: RowTable = RowTable::new(
    FormId::Form7,
    VictimOutcome::Dead,
    VictimField::Condition,
    &[
        ("alcohol", "3.1"),
        ("sleep", "3.2"),
        ("disability", "3.3"),
        ("unattended_children", "3.4"),
        ("other", "3.5"),
    ],
);

pub const FORM_7_INJURED_CONDITION_ROWS: RowTable = RowTable::new(
    FormId::Form7,
    VictimOutcome::Injured,
    VictimField::Condition,
    &[
        ("alcohol", "13.1"),
        ("sleep", "13.2"),
        ("disability", "13.3"),
        ("unattended_children", "13.4"),
        ("other", "13.5"),
    ],
);
