use crate::model::FormId;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const FORM_5_JSON: &str = include_str!("../../../../forms/form5-spzhs.json");
const FORM_7_JSON: &str = include_str!("../../../../forms/form7-co.json");

/// Row definitions of 1-СПЖС.
pub static FORM_5_ROWS: LazyLock<FormDef> = LazyLock::new(|| {
    serde_json::from_str(FORM_5_JSON).expect("embedded form5-spzhs.json is valid")
});

/// Row definitions of 7-CO.
pub static FORM_7_ROWS: LazyLock<FormDef> =
    LazyLock::new(|| serde_json::from_str(FORM_7_JSON).expect("embedded form7-co.json is valid"));

/// A row of a report form. Rows with children are section headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowDef {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RowDef>,
}

/// The fixed row list of one statistical form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDef {
    pub form: FormId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub rows: Vec<RowDef>,
}

impl FormDef {
    /// All row ids, parents before children, in form order.
    pub fn all_row_ids(&self) -> Vec<&str> {
        self.walk().into_iter().map(|(row, _)| row.id.as_str()).collect()
    }

    /// Every row paired with its nesting depth (top level is 0), in form order.
    pub fn walk(&self) -> Vec<(&RowDef, usize)> {
        let mut out = Vec::new();
        for row in &self.rows {
            walk_row(row, 0, &mut out);
        }
        out
    }

    pub fn find_row(&self, id: &str) -> Option<&RowDef> {
        self.walk()
            .into_iter()
            .map(|(row, _)| row)
            .find(|row| row.id == id)
    }

    /// Row ids that appear more than once anywhere in the tree.
    pub fn duplicate_row_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for id in self.all_row_ids() {
            if !seen.insert(id) {
                dups.push(id);
            }
        }
        dups
    }
}

fn walk_row<'a>(row: &'a RowDef, depth: usize, out: &mut Vec<(&'a RowDef, usize)>) {
    out.push((row, depth));
    for child in &row.children {
        walk_row(child, depth + 1, out);
    }
}

impl FormId {
    pub fn rows(&self) -> &'static FormDef {
        match self {
            FormId::Form5 => &FORM_5_ROWS,
            FormId::Form7 => &FORM_7_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_forms_load() {
        assert_eq!(FORM_5_ROWS.form, FormId::Form5);
        assert_eq!(FORM_7_ROWS.form, FormId::Form7);
        assert_eq!(FORM_5_ROWS.name, "1-СПЖС");
        assert_eq!(FORM_7_ROWS.name, "7-CO");
    }

    #[test]
    fn test_form5_row_ids_unique() {
        let ids = FORM_5_ROWS.all_row_ids();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert!(FORM_5_ROWS.duplicate_row_ids().is_empty());
    }

    #[test]
    fn test_form7_row_ids_unique() {
        let ids = FORM_7_ROWS.all_row_ids();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_nested_rows_are_visited() {
        let ids = FORM_5_ROWS.all_row_ids();
        assert!(ids.contains(&"2.1.7.2"));
        let pos_header = ids.iter().position(|id| *id == "2.1.7").unwrap();
        let pos_child = ids.iter().position(|id| *id == "2.1.7.1").unwrap();
        assert!(pos_header < pos_child);
    }

    #[test]
    fn test_find_row_and_depth() {
        let row = FORM_7_ROWS.find_row("5.12").unwrap();
        assert_eq!(row.label, "прочие / не классифицировано");
        let depth = FORM_7_ROWS
            .walk()
            .into_iter()
            .find(|(r, _)| r.id == "2.7.1")
            .map(|(_, d)| d);
        assert_eq!(depth, Some(2));
        assert!(FORM_7_ROWS.find_row("4").is_none());
    }

    #[test]
    fn test_duplicate_detection() {
        let json = r#"{
            "form": "form5",
            "name": "dup",
            "rows": [
                { "id": "1", "label": "a", "children": [ { "id": "1.1", "label": "b" } ] },
                { "id": "2", "label": "c", "children": [ { "id": "1.1", "label": "d" } ] }
            ]
        }"#;
        let form: FormDef = serde_json::from_str(json).unwrap();
        assert_eq!(form.duplicate_row_ids(), vec!["1.1"]);
    }
}
