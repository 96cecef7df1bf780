use pozhstat_core::error::PozhstatError;
use pozhstat_core::model::{FormId, VictimField, VictimOutcome};
use pozhstat_core::taxonomy::row_table;

const FORMS: [FormId; 2] = [FormId::Form5, FormId::Form7];

pub fn list() -> Result<(), PozhstatError> {
    println!("Supported report forms:\n");
    for form in FORMS {
        let def = form.rows();
        println!(
            "  {:<8} {} ({} rows)",
            form.to_string(),
            def.name,
            def.all_row_ids().len()
        );
        if let Some(ref desc) = def.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn rows(form: &str) -> Result<(), PozhstatError> {
    let form: FormId = form.parse()?;
    let def = form.rows();

    println!("{}\n", def.name);
    for (row, depth) in def.walk() {
        let indent = "  ".repeat(depth + 1);
        println!("{}{:<10} {}", indent, row.id, row.label);
    }
    println!();

    Ok(())
}

pub fn tables(form: &str) -> Result<(), PozhstatError> {
    let form: FormId = form.parse()?;
    let def = form.rows();

    println!("{} attribute tables\n", def.name);

    for outcome in [VictimOutcome::Dead, VictimOutcome::Injured] {
        for field in VictimField::ALL {
            let Some(table) = row_table(form, outcome, field) else {
                continue;
            };

            println!("  {} / {}:", outcome, field);
            let width = table.keys().map(str::len).max().unwrap_or(10);
            for (key, row_id) in table.entries() {
                let label = def.find_row(row_id).map(|r| r.label.as_str()).unwrap_or("-");
                println!("    {:<width$}  {:<8} {}", key, row_id, label, width = width);
            }
            println!();
        }
    }

    Ok(())
}
