use pozhstat_core::error::PozhstatError;
use pozhstat_core::objects::{builtin::form4_object_tree, load_object_tree, ObjectTree};
use std::path::{Path, PathBuf};

pub fn list(tree: Option<PathBuf>) -> Result<(), PozhstatError> {
    let loaded;
    let tree: &ObjectTree = match tree {
        Some(ref path) => {
            loaded = load_object_tree(path)?;
            &loaded
        }
        None => form4_object_tree(),
    };
    let classifier = pozhstat_core::classify::CoObjectClassifier::new(tree);

    match tree.version.as_deref() {
        Some(v) => println!("{} (version {})\n", tree.name, v),
        None => println!("{}\n", tree.name),
    }

    for (node, depth) in tree.walk() {
        let rows = classifier.map_code(Some(node.id.as_str()));
        let indent = "  ".repeat(depth + 1);
        let width = 12usize.saturating_sub(indent.len()) + 10;
        println!(
            "{}{:<width$} {:>5}/{:<6} {}",
            indent,
            node.id,
            rows.dead_row_id,
            rows.injured_row_id,
            node.label.as_deref().unwrap_or(""),
            width = width
        );
    }
    println!();

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), PozhstatError> {
    let tree = load_object_tree(file)?;
    let codes = tree.flatten();

    println!("Object tree '{}' is valid.", tree.name);
    println!("  Top-level sections: {}", tree.nodes.len());
    println!("  Codes: {}", codes.len());

    // Codes with a dedicated 7-CO row that this tree does not carry still
    // classify, but are worth pointing out.
    let missing: Vec<&str> = pozhstat_core::classify::CO_OBJECT_BASE_ROWS
        .iter()
        .map(|(code, _)| *code)
        .filter(|code| !codes.contains(code))
        .collect();

    if !missing.is_empty() {
        println!("\nWarnings:");
        for code in &missing {
            println!("  - code '{}' has a dedicated 7-CO row but is not in the tree", code);
        }
    }

    Ok(())
}
