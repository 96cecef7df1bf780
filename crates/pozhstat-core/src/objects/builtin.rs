use super::ObjectTree;
use std::sync::LazyLock;

const FORM_4_OBJECTS_JSON: &str = include_str!("../../../../forms/form4-sovp-objects.json");

static FORM_4_OBJECT_TREE: LazyLock<ObjectTree> = LazyLock::new(|| {
    serde_json::from_str(FORM_4_OBJECTS_JSON).expect("embedded form4-sovp-objects.json is valid")
});

/// The Form-4 (СОВП) object classifier shipped with the crate.
pub fn form4_object_tree() -> &'static ObjectTree {
    &FORM_4_OBJECT_TREE
}
