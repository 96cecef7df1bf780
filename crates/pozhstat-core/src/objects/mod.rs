pub mod builtin;

use crate::error::PozhstatError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A node of the Form-4 (СОВП) object-of-origin classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectNode {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ObjectNode>,
}

impl ObjectNode {
    /// This node's id followed by all descendant ids, depth-first.
    pub fn flatten(&self) -> Vec<&str> {
        let mut out = Vec::new();
        flatten_into(self, &mut out);
        out
    }
}

fn flatten_into<'a>(node: &'a ObjectNode, out: &mut Vec<&'a str>) {
    out.push(node.id.as_str());
    for child in &node.children {
        flatten_into(child, out);
    }
}

/// The whole classifier tree as published with Form 4.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectTree {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub nodes: Vec<ObjectNode>,
}

impl ObjectTree {
    /// Every code in the tree, parents and children both, depth-first.
    pub fn flatten(&self) -> Vec<&str> {
        self.nodes.iter().flat_map(|n| n.flatten()).collect()
    }

    /// Every node paired with its depth (top level is 0).
    pub fn walk(&self) -> Vec<(&ObjectNode, usize)> {
        fn go<'a>(node: &'a ObjectNode, depth: usize, out: &mut Vec<(&'a ObjectNode, usize)>) {
            out.push((node, depth));
            for child in &node.children {
                go(child, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        for node in &self.nodes {
            go(node, 0, &mut out);
        }
        out
    }

    pub fn contains(&self, code: &str) -> bool {
        self.flatten().contains(&code)
    }
}

/// Load an object tree from a JSON file.
pub fn load_object_tree(path: &Path) -> Result<ObjectTree, PozhstatError> {
    let content = std::fs::read_to_string(path).map_err(|e| PozhstatError::TreeLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_object_tree(&content, path)
}

/// Parse an object tree from a JSON string read from `source`.
pub fn parse_object_tree(json: &str, source: &Path) -> Result<ObjectTree, PozhstatError> {
    let tree: ObjectTree = serde_json::from_str(json).map_err(|e| PozhstatError::TreeLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_object_tree(&tree)?;
    Ok(tree)
}

/// Parse an object tree from a JSON string (no file path context).
pub fn parse_object_tree_str(json: &str) -> Result<ObjectTree, PozhstatError> {
    let tree: ObjectTree = serde_json::from_str(json)?;
    validate_object_tree(&tree)?;
    Ok(tree)
}

/// Validate that a tree is non-empty and every code is unique and non-blank.
pub fn validate_object_tree(tree: &ObjectTree) -> Result<(), PozhstatError> {
    if tree.nodes.is_empty() {
        return Err(PozhstatError::TreeInvalid("nodes must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for code in tree.flatten() {
        if code.trim().is_empty() {
            return Err(PozhstatError::TreeInvalid(
                "object code must not be empty".into(),
            ));
        }
        if code.trim() != code {
            return Err(PozhstatError::TreeInvalid(format!(
                "object code '{}' has surrounding whitespace",
                code
            )));
        }
        if !seen.insert(code) {
            return Err(PozhstatError::TreeInvalid(format!(
                "object code '{}' appears more than once",
                code
            )));
        }
    }

    Ok(())
}
