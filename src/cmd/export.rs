use crate::export::{export_file_name, generate, ExportFormat, ExportOptions, SqlDialect};
use std::fs;
use std::path::PathBuf;

pub fn run(
    format: String,
    dialect: String,
    output: Option<PathBuf>,
    drop_statements: bool,
    store_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse().map_err(anyhow::Error::msg)?;
    let dialect: SqlDialect = dialect.parse().map_err(anyhow::Error::msg)?;

    let store = super::open_store(store_dir)?;
    let schema = super::load_required(&store)?;

    let mut options = ExportOptions::default().with_dialect(dialect);
    if drop_statements {
        options = options.with_drop_statements();
    }

    let content = generate(&schema, format, &options);

    match output {
        Some(path) => {
            // `-o auto` resolves to the suggested download name
            let path = if path.as_os_str() == "auto" {
                PathBuf::from(export_file_name(&schema, format))
            } else {
                path
            };
            fs::write(&path, &content)?;
            eprintln!(
                "Exported {} tables, {} relationships to {} [{}]",
                schema.len(),
                schema.relationships.len(),
                path.display(),
                format
            );
        }
        None => print!("{content}"),
    }

    Ok(())
}
