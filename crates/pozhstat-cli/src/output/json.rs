use pozhstat_core::error::PozhstatError;
use serde_json::Value;

pub fn print<T: serde::Serialize>(value: &T) -> Result<(), PozhstatError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Wrap classified codes with the fallback count of the run.
pub fn classified(
    rows: &[(String, pozhstat_core::Form7CoObjectRows)],
    fallback_trigger_count: u64,
) -> Value {
    let entries: Vec<Value> = rows
        .iter()
        .map(|(code, r)| {
            serde_json::json!({
                "code": code,
                "dead_row_id": r.dead_row_id,
                "injured_row_id": r.injured_row_id,
                "fallback": r.fallback,
            })
        })
        .collect();

    serde_json::json!({
        "codes": entries,
        "fallback_trigger_count": fallback_trigger_count,
    })
}
