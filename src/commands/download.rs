use std::path::Path;

use anyhow::{Context as _, Result};
use colored::Colorize;

use omegamon_guide::Download;

pub fn run(kind: &str, out_dir: &Path, stdout: bool) -> Result<()> {
    let download: Download = kind.parse()?;

    if stdout {
        println!("{}", download.contents());
        return Ok(());
    }

    let path = download
        .write_to(out_dir)
        .with_context(|| format!("Failed to write {}", download.file_name()))?;

    println!("{} {}", "✓".green().bold(), download.notification());
    println!("  {} {}", "→".dimmed(), path.display());
    Ok(())
}
