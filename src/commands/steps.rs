//! Steps command - replay step completions and show deployment progress

use anyhow::Result;
use colored::*;

use omegamon_guide::tracker::step_title;
use omegamon_guide::GuideSession;

use super::Context;

const BAR_WIDTH: usize = 30;

pub fn run(ctx: &Context, complete: &[u32], toggle: &[u32], json: bool) -> Result<()> {
    // Step state needs no page content
    let mut session = GuideSession::new(&[], &ctx.config);
    let mut updates = Vec::new();

    for &step in complete {
        updates.push(session.on_step_completed(step)?);
    }
    for &step in toggle {
        updates.push(session.on_step_toggled(step)?);
    }

    let tracker = session.tracker();
    let progress = tracker.progress();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "updates": updates,
                "progress": progress,
                "completed_steps": tracker.completed_steps(),
            }))?
        );
        return Ok(());
    }

    for update in &updates {
        if let Some(message) = update.change.notification() {
            println!("{} {}", "✓".green(), message);
        }
    }
    if !updates.is_empty() {
        println!();
    }

    println!("{}", "Deployment Progress".bold());
    println!("{}", "=".repeat(50));
    println!("{} {:.0}%", progress_bar(progress.percent), progress.percent);
    println!("{}", progress.label());
    println!();

    for step in 1..=tracker.total_steps() {
        let title = step_title(step).unwrap_or("");
        let line = format!("{:>2}. {}", step, title);
        if tracker.is_completed(step) {
            println!("  {} {}", "✓".green(), line.dimmed());
        } else if step == tracker.current_step() {
            println!("  {} {}", "→".cyan(), line.bold());
        } else {
            println!("    {}", line);
        }
    }

    Ok(())
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled).green(),
        "-".repeat(BAR_WIDTH - filled)
    )
}
