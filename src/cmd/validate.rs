use crate::validate::validate;
use std::path::PathBuf;

pub fn run(json: bool, strict: bool, store_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let store = super::open_store(store_dir)?;
    let schema = super::load_required(&store)?;

    let report = validate(&schema);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for issue in &report.issues {
            eprintln!("{}", issue);
        }
        if !report.issues.is_empty() {
            eprintln!();
        }

        eprintln!("Validation summary:");
        eprintln!("  Schema: {}", schema.name);
        eprintln!("  Tables: {}", schema.len());
        eprintln!("  Errors: {}", report.errors().len());
        eprintln!("  Warnings: {}", report.warnings().len());
    }

    if report.has_errors() || (strict && !report.is_clean()) {
        anyhow::bail!("validation failed");
    }

    Ok(())
}
