pub mod aggregate;
pub mod classify;
pub mod forms;
pub mod normalize;
pub mod objects;

use pozhstat_core::classify::CoObjectClassifier;
use pozhstat_core::error::PozhstatError;
use pozhstat_core::objects::{builtin::form4_object_tree, load_object_tree};
use std::path::PathBuf;

/// Build a classifier over a custom tree file, or over the built-in tree.
///
/// Each run gets its own classifier so the reported fallback count covers
/// this invocation only.
fn load_classifier(tree: Option<PathBuf>) -> Result<CoObjectClassifier, PozhstatError> {
    match tree {
        Some(path) => {
            let tree = load_object_tree(&path)?;
            tracing::info!(path = %path.display(), name = %tree.name, "using custom object tree");
            Ok(CoObjectClassifier::new(&tree))
        }
        None => Ok(CoObjectClassifier::new(form4_object_tree())),
    }
}
