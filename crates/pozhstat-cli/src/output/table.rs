use pozhstat_core::aggregate::FormReport;
use pozhstat_core::trace::TraceSeverity;
use pozhstat_core::Form7CoObjectRows;

pub fn print_report(report: &FormReport, show_zero: bool) {
    println!("=== {} ({} incidents) ===\n", report.form_name, report.incidents);

    let shown: Vec<_> = if show_zero {
        report.rows.iter().collect()
    } else {
        report.non_zero_rows().collect()
    };

    if shown.is_empty() {
        println!("  No rows with a non-zero count.\n");
    } else {
        let max_id = shown
            .iter()
            .map(|r| r.id.len() + r.depth * 2)
            .max()
            .unwrap_or(6);

        for row in &shown {
            let indent = "  ".repeat(row.depth);
            println!(
                "  {}{:<width$}  {:>6}  {}",
                indent,
                row.id,
                row.count,
                row.label,
                width = max_id - row.depth * 2
            );
        }
        println!();
    }

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for w in &report.warnings {
            let marker = match w.severity {
                TraceSeverity::Important => "! ",
                TraceSeverity::Info => "  ",
            };
            let at = match w.incident_id.as_deref() {
                Some(id) => format!("{} (#{})", id, w.incident_index),
                None => format!("#{}", w.incident_index),
            };
            println!("  {} {}: {}", marker, at, w.message);
        }
        println!();
    }
}

pub fn print_classified(rows: &[(String, Form7CoObjectRows)], fallback_trigger_count: u64) {
    let max_code = rows.iter().map(|(c, _)| c.len()).max().unwrap_or(4).max(4);

    println!(
        "  {:<width$}  {:<6}  {:<7}  Note",
        "Code",
        "Dead",
        "Injured",
        width = max_code
    );
    println!("  {}", "-".repeat(max_code + 28));

    for (code, r) in rows {
        let note = if r.fallback { "fallback" } else { "" };
        println!(
            "  {:<width$}  {:<6}  {:<7}  {}",
            code,
            r.dead_row_id,
            r.injured_row_id,
            note,
            width = max_code
        );
    }

    println!();
    println!("Fallbacks triggered: {}", fallback_trigger_count);
}
