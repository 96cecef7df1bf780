use crate::model::FormId;
use crate::trace::TraceWarning;
use serde::{Deserialize, Serialize};

/// Count for one row of a report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCount {
    pub id: String,
    pub label: String,
    /// Nesting depth in the form's row tree (top level is 0).
    pub depth: usize,
    pub count: u64,
}

/// Aggregated counts for one form, in row order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormReport {
    pub form: FormId,
    /// Display name of the form (e.g., "7-CO").
    pub form_name: String,
    /// Number of incident records folded into the report.
    pub incidents: usize,
    pub rows: Vec<RowCount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TraceWarning>,
}

impl FormReport {
    /// Count of a row, 0 for rows the form does not define.
    pub fn count(&self, row_id: &str) -> u64 {
        self.rows
            .iter()
            .find(|r| r.id == row_id)
            .map(|r| r.count)
            .unwrap_or(0)
    }

    /// Rows with a non-zero count.
    pub fn non_zero_rows(&self) -> impl Iterator<Item = &RowCount> {
        self.rows.iter().filter(|r| r.count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, count: u64) -> RowCount {
        RowCount {
            id: id.to_string(),
            label: String::new(),
            depth: 0,
            count,
        }
    }

    #[test]
    fn test_non_zero_rows_keeps_order() {
        let report = FormReport {
            form: FormId::Form7,
            form_name: "7-CO".to_string(),
            incidents: 2,
            rows: vec![row("1", 2), row("2", 0), row("5", 1), row("5.1", 0)],
            warnings: Vec::new(),
        };
        let ids: Vec<&str> = report.non_zero_rows().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
        assert_eq!(report.count("5"), 1);
        assert_eq!(report.count("99"), 0);
    }
}
