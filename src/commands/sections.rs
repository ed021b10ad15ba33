//! Sections command - show what the search index holds

use anyhow::Result;
use colored::Colorize;

use omegamon_guide::build_index;

use super::{pad, Context};

pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let start = std::time::Instant::now();
    let sections = ctx.sections()?;
    let index = build_index(&sections);
    let duration_ms = start.elapsed().as_millis();
    let skipped = sections.len() - index.len();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "generated_at": chrono::Local::now().to_rfc3339(),
                "page": ctx.paths.page.display().to_string(),
                "sections": sections.len(),
                "indexed": index.len(),
                "skipped": skipped,
                "duration_ms": duration_ms,
                "entries": index.entries(),
            })
        );
        return Ok(());
    }

    println!("{}", "Guide Sections".bold());
    println!("{}", "=".repeat(60));
    println!();

    let width = index
        .entries()
        .iter()
        .map(|e| unicode_width::UnicodeWidthStr::width(e.anchor.as_str()))
        .max()
        .unwrap_or(0)
        + 2;

    for entry in index.entries() {
        println!("  {}{}", pad(&entry.anchor, width).cyan(), entry.title);
    }

    println!();
    println!(
        "{} Indexed {} sections in {}ms",
        "✓".green().bold(),
        index.len().to_string().cyan(),
        duration_ms
    );
    if skipped > 0 {
        println!(
            "  {} {} sections skipped (no id or heading)",
            "→".dimmed(),
            skipped
        );
    }

    Ok(())
}
