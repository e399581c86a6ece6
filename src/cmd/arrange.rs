use crate::schema::ArrangeAlgorithm;
use std::path::PathBuf;

pub fn run(algorithm: String, dry_run: bool, store_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let algorithm: ArrangeAlgorithm = algorithm.parse().map_err(anyhow::Error::msg)?;

    let mut store = super::open_store(store_dir)?;
    let schema = super::load_required(&store)?;

    if schema.is_empty() {
        anyhow::bail!("schema has no tables to arrange");
    }

    let arranged = schema.auto_arrange(algorithm);

    for table in arranged.iter() {
        eprintln!("  {} -> ({}, {})", table.name, table.x, table.y);
    }

    if dry_run {
        eprintln!("Dry run: {} tables arranged ({}), nothing saved", arranged.len(), algorithm);
        return Ok(());
    }

    store.save(&arranged)?;
    eprintln!("Arranged {} tables ({})", arranged.len(), algorithm);

    Ok(())
}
