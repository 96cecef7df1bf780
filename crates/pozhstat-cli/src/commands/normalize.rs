use pozhstat_core::error::PozhstatError;
use pozhstat_core::model::VictimField;
use pozhstat_core::normalize_incident_victim_value;

pub fn run(field: &str, value: &str) -> Result<(), PozhstatError> {
    let field: VictimField = field.parse()?;
    let canonical = normalize_incident_victim_value(field, Some(value)).unwrap_or(value);

    if canonical == value {
        println!("{canonical}");
    } else {
        println!("{canonical}  (legacy '{value}')");
    }
    Ok(())
}
