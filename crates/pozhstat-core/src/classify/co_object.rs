use super::logger::{FallbackLogger, FallbackMetadata, TracingLogger};
use crate::objects::builtin::form4_object_tree;
use crate::objects::ObjectTree;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

pub const EMPTY_CODE_TAG: &str = "Empty object code";
pub const UNRECOGNIZED_CODE_TAG: &str = "Unrecognized object code";

/// Form-7 rows an object-of-origin code counts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Form7CoObjectRows {
    pub dead_row_id: &'static str,
    pub injured_row_id: &'static str,
    /// True only when the code was empty or unknown to the classifier.
    pub fallback: bool,
}

impl Form7CoObjectRows {
    pub const fn new(dead_row_id: &'static str, injured_row_id: &'static str) -> Self {
        Self {
            dead_row_id,
            injured_row_id,
            fallback: false,
        }
    }
}

/// "Прочие / не классифицировано", assigned explicitly to tree codes without a dedicated row.
pub const CO_OTHER_ROWS: Form7CoObjectRows = Form7CoObjectRows::new("5.12", "15.12");

/// Same rows as [`CO_OTHER_ROWS`], returned when a code is empty or unrecognized.
pub const CO_FALLBACK_ROWS: Form7CoObjectRows = Form7CoObjectRows {
    dead_row_id: "5.12",
    injured_row_id: "15.12",
    fallback: true,
};

/// Codes with a dedicated Form-7 row. Wins over the tree-wide "other" assignment.
pub const CO_OBJECT_BASE_ROWS: &[(&str, Form7CoObjectRows)] = &[
    ("9.1", Form7CoObjectRows::new("5.8", "15.8")),
    ("9.2", Form7CoObjectRows::new("5.8", "15.8")),
    ("11.3", Form7CoObjectRows::new("5.10", "15.10")),
    ("14.1", Form7CoObjectRows::new("5.2", "15.2")),
    ("14.1.1", Form7CoObjectRows::new("5.2", "15.2")),
    ("14.1.2", Form7CoObjectRows::new("5.3", "15.3")),
    ("14.1.3", Form7CoObjectRows::new("5.4", "15.4")),
    ("14.2", Form7CoObjectRows::new("5.5", "15.5")),
    ("14.3", Form7CoObjectRows::new("5.6", "15.6")),
    ("14.4", Form7CoObjectRows::new("5.1", "15.1")),
    ("14.5", Form7CoObjectRows::new("5.9", "15.9")),
    ("14.6", Form7CoObjectRows::new("5.7", "15.7")),
    ("14.7", Form7CoObjectRows::new("5.11", "15.11")),
];

/// Number of times a classifier returned its fallback rows.
///
/// Diagnostic only. Increments are atomic but relaxed.
#[derive(Debug, Default)]
pub struct FallbackCounter(AtomicU64);

impl FallbackCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }

    /// Record one fallback and return the new count.
    fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

static BUILTIN: LazyLock<CoObjectClassifier> =
    LazyLock::new(|| CoObjectClassifier::new(form4_object_tree()));

/// Maps Form-4 object-of-origin codes to Form-7 (CO) row pairs.
///
/// The lookup table is built once from [`CO_OBJECT_BASE_ROWS`] plus every
/// code of the object tree, which is assigned [`CO_OTHER_ROWS`] unless the
/// base table already lists it. Lookups never fail: empty and unknown codes
/// get [`CO_FALLBACK_ROWS`], bump the counter and are reported to the logger.
#[derive(Debug)]
pub struct CoObjectClassifier {
    table: HashMap<String, Form7CoObjectRows>,
    counter: FallbackCounter,
}

impl CoObjectClassifier {
    pub fn new(tree: &ObjectTree) -> Self {
        let mut table: HashMap<String, Form7CoObjectRows> = tree
            .flatten()
            .into_iter()
            .map(|code| (code.to_string(), CO_OTHER_ROWS))
            .collect();

        for (code, rows) in CO_OBJECT_BASE_ROWS {
            table.insert(code.to_string(), *rows);
        }

        Self {
            table,
            counter: FallbackCounter::new(),
        }
    }

    /// Shared classifier over the embedded Form-4 tree.
    ///
    /// Its counter is process-wide; tests should build their own classifier.
    pub fn builtin() -> &'static CoObjectClassifier {
        &BUILTIN
    }

    /// Classify a code, reporting fallbacks through `tracing`.
    pub fn map_code(&self, code: Option<&str>) -> Form7CoObjectRows {
        self.map_code_with(code, &TracingLogger)
    }

    /// Classify a code, reporting fallbacks to `logger`.
    pub fn map_code_with(
        &self,
        code: Option<&str>,
        logger: &dyn FallbackLogger,
    ) -> Form7CoObjectRows {
        let trimmed = code.map(str::trim).unwrap_or_default();

        if trimmed.is_empty() {
            self.fall_back(code, EMPTY_CODE_TAG.to_string(), logger);
            return CO_FALLBACK_ROWS;
        }

        if let Some(rows) = self.table.get(trimmed) {
            return *rows;
        }

        self.fall_back(
            code,
            format!("{UNRECOGNIZED_CODE_TAG} '{trimmed}', counting it as other"),
            logger,
        );
        CO_FALLBACK_ROWS
    }

    fn fall_back(&self, code: Option<&str>, message: String, logger: &dyn FallbackLogger) {
        let count = self.counter.increment();
        logger.log(
            &format!("[form7-co] {message}"),
            &FallbackMetadata {
                code,
                fallback_trigger_count: count,
                fallback_rows: CO_FALLBACK_ROWS,
            },
        );
    }

    pub fn fallback_counter(&self) -> &FallbackCounter {
        &self.counter
    }

    pub fn fallback_trigger_count(&self) -> u64 {
        self.counter.get()
    }

    pub fn reset_fallback_trigger_count(&self) {
        self.counter.reset();
    }

    /// Number of recognized codes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
