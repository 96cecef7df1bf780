use pozhstat_core::classify::TracingLogger;
use pozhstat_core::error::PozhstatError;
use pozhstat_core::model::FormId;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    form: &str,
    tree: Option<PathBuf>,
    output_format: &str,
    show_zero: bool,
) -> Result<(), PozhstatError> {
    let form: FormId = form.parse()?;
    if tree.is_some() && form != FormId::Form7 {
        tracing::warn!(%form, "--tree only affects form7, ignoring it");
    }

    let records = pozhstat_core::load_records(&input_file)?;
    let classifier = super::load_classifier(tree)?;
    let report = pozhstat_core::aggregate_with(form, &records, &classifier, &TracingLogger);

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report, show_zero),
    }

    Ok(())
}
