use pozhstat_core::error::PozhstatError;
use std::path::PathBuf;

use crate::output;

pub fn run(
    codes: &[String],
    tree: Option<PathBuf>,
    output_format: &str,
) -> Result<(), PozhstatError> {
    let classifier = super::load_classifier(tree)?;

    let rows: Vec<_> = codes
        .iter()
        .map(|code| (code.clone(), classifier.map_code(Some(code.as_str()))))
        .collect();
    let fallbacks = classifier.fallback_trigger_count();

    match output_format {
        "json" => output::json::print(&output::json::classified(&rows, fallbacks))?,
        _ => output::table::print_classified(&rows, fallbacks),
    }

    Ok(())
}
