use crate::model::VictimField;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Resolve a stored victim attribute value to its current canonical key.
///
/// Absent and empty values are returned as given. A value listed as a legacy
/// alias for `field` is replaced by its canonical key; any other value passes
/// through unchanged, so current keys and unknown values are indistinguishable
/// here. Normalization never rejects or invents values.
pub fn normalize_incident_victim_value(field: VictimField, value: Option<&str>) -> Option<&str> {
    let raw = value?;
    if raw.is_empty() {
        return Some(raw);
    }

    match aliases(field).get(raw) {
        Some(canonical) => Some(*canonical),
        None => Some(raw),
    }
}

/// Legacy alias table for one dimension. Empty for dimensions without aliases.
pub fn aliases(field: VictimField) -> &'static HashMap<&'static str, &'static str> {
    match field {
        VictimField::SocialStatus => &SOCIAL_STATUS_ALIASES,
        VictimField::Condition => &CONDITION_ALIASES,
        VictimField::DeathCause => &DEATH_CAUSE_ALIASES,
        VictimField::DeathPlace => &NO_ALIASES,
    }
}

// Keys below exist in historical records and must stay byte-exact.

static SOCIAL_STATUS_ALIASES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("child_preschool", "child");
        m.insert("student_school", "student_10_16");
        m.insert("student_uni", "student");
        m
    });

static CONDITION_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("unsupervised_child", "unattended_children");
    m
});

static DEATH_CAUSE_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("combustion_products", "smoke");
    m.insert("psych", "panic");
    m
});

static NO_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(HashMap::new);
