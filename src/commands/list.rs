use serde::Serialize;

use navcalc::calc::Calculator;

#[derive(Serialize)]
struct Entry {
    command: &'static str,
    title: &'static str,
    formula: &'static str,
}

pub fn execute(json: bool) -> Result<(), super::Error> {
    let entries: Vec<Entry> = Calculator::ALL
        .into_iter()
        .map(|c| Entry {
            command: c.command(),
            title: c.title(),
            formula: c.formula(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        println!("{:<12} {}", entry.command, entry.title);
        for line in entry.formula.lines() {
            println!("{:<12} {}", "", line);
        }
    }
    Ok(())
}
