//! Integration tests for aggregate() and the object-code classifier.
//!
//! Records are built from JSON the way the portal stores them, so legacy
//! attribute values and camelCase keys go through the same path as real data.

use pozhstat_core::classify::{
    CoObjectClassifier, FallbackMetadata, Form7CoObjectRows, SilentLogger,
};
use pozhstat_core::model::{FormId, IncidentRecord, VictimField};
use pozhstat_core::objects::{builtin::form4_object_tree, load_object_tree};
use pozhstat_core::taxonomy::{all_row_tables, FORM_5_ROWS, FORM_7_ROWS};
use pozhstat_core::trace::TraceWarningKind;
use pozhstat_core::{aggregate, aggregate_with, normalize_incident_victim_value, parse_records};
use std::cell::RefCell;
use std::collections::HashSet;

fn records(json: &str) -> Vec<IncidentRecord> {
    parse_records(json.as_bytes()).unwrap()
}

// ---------------------------------------------------------------------------
// Test 1: Form 5 over a mixed set of residential fires
// ---------------------------------------------------------------------------
#[test]
fn form5_mixed_fires() {
    let input = records(
        r#"[
            {
                "id": "F-1",
                "victims": [
                    { "outcome": "dead", "socialStatus": "pensioner", "condition": "alcohol",
                      "deathCause": "smoke", "deathPlace": "on_site" },
                    { "outcome": "dead", "socialStatus": "child_preschool", "condition": "unsupervised_child",
                      "deathCause": "combustion_products", "deathPlace": "hospital" },
                    { "outcome": "injured", "socialStatus": "worker" }
                ]
            },
            {
                "id": "F-2",
                "victims": [
                    { "outcome": "dead", "socialStatus": "student_7_10", "deathCause": "psych" }
                ]
            },
            { "id": "F-3" }
        ]"#,
    );

    let report = aggregate(FormId::Form5, &input);

    assert_eq!(report.form_name, "1-СПЖС");
    assert_eq!(report.incidents, 3);
    assert_eq!(report.count("1"), 3);
    assert_eq!(report.count("2"), 3);
    assert_eq!(report.count("6"), 1);

    // social status
    assert_eq!(report.count("2.1.5"), 1);
    assert_eq!(report.count("2.1.6"), 1); // child_preschool -> child
    assert_eq!(report.count("2.1.7.1"), 1);
    assert_eq!(report.count("2.1.7"), 1);
    assert_eq!(report.count("2.1"), 3);

    // condition
    assert_eq!(report.count("3.1.1"), 1);
    assert_eq!(report.count("3.1.4"), 1); // unsupervised_child -> unattended_children
    assert_eq!(report.count("3"), 2);

    // death cause: smoke twice (one via legacy alias), panic via "psych"
    assert_eq!(report.count("4.1.2"), 2);
    assert_eq!(report.count("4.1.4"), 1);

    // death place
    assert_eq!(report.count("5.1.1"), 1);
    assert_eq!(report.count("5.1.3"), 1);
    assert_eq!(report.count("5"), 2);

    assert!(report.warnings.is_empty());
}

// ---------------------------------------------------------------------------
// Test 2: Form 7 with dedicated, explicit-other and unknown object codes
// ---------------------------------------------------------------------------
#[test]
fn form7_object_codes() {
    let input = records(
        r#"[
            { "id": "CO-1", "objectCode": "14.4",
              "victims": [ { "outcome": "dead", "socialStatus": "prisoner", "condition": "sleep" } ] },
            { "id": "CO-2", "objectCode": "14.1.2",
              "victims": [ { "outcome": "injured", "socialStatus": "student_school" },
                           { "outcome": "injured", "condition": "unsupervised_child" } ] },
            { "id": "CO-3", "objectCode": "6.2",
              "victims": [ { "outcome": "dead", "socialStatus": "homeless" } ] },
            { "id": "CO-4", "objectCode": "99.99",
              "victims": [ { "outcome": "injured" } ] },
            { "id": "CO-5",
              "victims": [ { "outcome": "dead" } ] }
        ]"#,
    );

    let classifier = CoObjectClassifier::new(form4_object_tree());
    let report = aggregate_with(FormId::Form7, &input, &classifier, &SilentLogger);

    assert_eq!(report.count("1"), 5);
    assert_eq!(report.count("2"), 3);
    assert_eq!(report.count("12"), 3);

    assert_eq!(report.count("2.10"), 1);
    assert_eq!(report.count("2.9"), 1);
    assert_eq!(report.count("3.2"), 1);
    assert_eq!(report.count("12.7.2"), 1);
    assert_eq!(report.count("12.7"), 1);
    assert_eq!(report.count("13.4"), 1);

    assert_eq!(report.count("5.1"), 1);
    assert_eq!(report.count("15.3"), 2);
    // 6.2 is an explicit "other"; CO-5 has no code at all
    assert_eq!(report.count("5.12"), 2);
    assert_eq!(report.count("15.12"), 1);
    assert_eq!(report.count("5"), 3);
    assert_eq!(report.count("15"), 3);

    let fallbacks: Vec<_> = report
        .warnings
        .iter()
        .filter(|w| w.kind == TraceWarningKind::ObjectFallback)
        .map(|w| w.incident_id.as_deref())
        .collect();
    assert_eq!(fallbacks, vec![Some("CO-4"), Some("CO-5")]);
    assert_eq!(classifier.fallback_trigger_count(), 2);
}

// ---------------------------------------------------------------------------
// Test 3: Logger sees exactly one call per fallback, with the right tag
// ---------------------------------------------------------------------------
#[test]
fn injected_logger_captures_fallbacks() {
    let classifier = CoObjectClassifier::new(form4_object_tree());
    let calls: RefCell<Vec<(String, u64)>> = RefCell::new(Vec::new());
    let logger = |message: &str, meta: &FallbackMetadata<'_>| {
        calls
            .borrow_mut()
            .push((message.to_string(), meta.fallback_trigger_count));
    };

    let rows = classifier.map_code_with(Some("99.99"), &logger);
    assert_eq!(
        rows,
        Form7CoObjectRows {
            dead_row_id: "5.12",
            injured_row_id: "15.12",
            fallback: true
        }
    );
    let rows = classifier.map_code_with(Some(""), &logger);
    assert!(rows.fallback);
    let rows = classifier.map_code_with(Some("14.7"), &logger);
    assert!(!rows.fallback);

    let calls = calls.into_inner();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].0.contains("Unrecognized object code"));
    assert_eq!(calls[0].1, 1);
    assert!(calls[1].0.contains("Empty object code"));
    assert_eq!(calls[1].1, 2);
}

// ---------------------------------------------------------------------------
// Test 4: Every code of the built-in tree is recognized
// ---------------------------------------------------------------------------
#[test]
fn builtin_tree_codes_never_fall_back() {
    let classifier = CoObjectClassifier::new(form4_object_tree());
    for code in form4_object_tree().flatten() {
        let rows = classifier.map_code_with(Some(code), &SilentLogger);
        assert!(!rows.fallback, "code {code} fell back");
    }
    assert_eq!(classifier.fallback_trigger_count(), 0);
    assert_eq!(classifier.len(), form4_object_tree().flatten().len());
}

// ---------------------------------------------------------------------------
// Test 5: Replacement tree loaded from disk
// ---------------------------------------------------------------------------
#[test]
fn custom_tree_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objects.json");
    std::fs::write(
        &path,
        r#"{ "name": "Regional", "version": "2025.1",
             "nodes": [ { "id": "20", "children": [ { "id": "20.1" } ] } ] }"#,
    )
    .unwrap();

    let tree = load_object_tree(&path).unwrap();
    let classifier = CoObjectClassifier::new(&tree);

    assert!(!classifier.map_code_with(Some("20.1"), &SilentLogger).fallback);
    assert!(!classifier.map_code_with(Some("14.4"), &SilentLogger).fallback);
    // in the built-in tree only
    assert!(classifier.map_code_with(Some("10.1"), &SilentLogger).fallback);
}

// ---------------------------------------------------------------------------
// Test 6: Row definitions and tables are consistent
// ---------------------------------------------------------------------------
#[test]
fn form_rows_unique_and_tables_resolve() {
    for form in [&*FORM_5_ROWS, &*FORM_7_ROWS] {
        let ids = form.all_row_ids();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len(), "{} has duplicate row ids", form.name);
    }

    for table in all_row_tables() {
        let defined: HashSet<&str> = table.form.rows().all_row_ids().into_iter().collect();
        for row in table.row_ids() {
            assert!(defined.contains(row), "{row} missing from {}", table.form);
        }
    }
}

// ---------------------------------------------------------------------------
// Test 7: Normalization is stable for every canonical table key
// ---------------------------------------------------------------------------
#[test]
fn canonical_table_keys_normalize_to_themselves() {
    for table in all_row_tables() {
        for key in table.keys() {
            assert_eq!(normalize_incident_victim_value(table.field, Some(key)), Some(key));
        }
    }
    assert_eq!(
        normalize_incident_victim_value(VictimField::SocialStatus, None),
        None
    );
}
