use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub fn run(force: bool, store_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let mut store = super::open_store(store_dir)?;

    if store.load()?.is_none() {
        eprintln!("No saved schema found");
        return Ok(());
    }

    if !force && !confirm()? {
        eprintln!("Clear cancelled");
        return Ok(());
    }

    store.clear()?;
    eprintln!("Saved schema deleted");

    Ok(())
}

/// Prompt on stderr, read the answer from stdin.
fn confirm() -> anyhow::Result<bool> {
    eprint!("Delete the saved schema? This action cannot be undone. [y/N] ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
