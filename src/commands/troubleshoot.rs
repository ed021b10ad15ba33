use anyhow::Result;
use colored::*;

use omegamon_guide::core::troubleshooting::{Severity, TroubleshootingPath};
use omegamon_guide::IssueCategory;

pub fn run(issue: Option<&str>, json: bool) -> Result<()> {
    let category = match issue {
        Some(name) => name.parse::<IssueCategory>()?,
        None => return list_categories(json),
    };
    let path = category.path();

    if json {
        println!("{}", serde_json::to_string_pretty(path)?);
    } else {
        print_path(path);
    }

    Ok(())
}

fn list_categories(json: bool) -> Result<()> {
    if json {
        let names: Vec<_> = IssueCategory::ALL.iter().map(|c| c.as_str()).collect();
        println!("{}", serde_json::json!({ "categories": names }));
        return Ok(());
    }

    println!("{}", "Troubleshooting".bold());
    println!("{}", "=".repeat(50));
    for category in IssueCategory::ALL {
        println!("  {} - {}", category.as_str().cyan(), category.path().heading);
    }
    println!();
    println!("Run {} for details.", "guide troubleshoot <category>".cyan());
    Ok(())
}

fn print_path(path: &TroubleshootingPath) {
    println!("{}", path.heading.bold());
    println!("{}", "=".repeat(50));
    println!();

    for check in path.checks {
        let marker = match check.severity {
            Severity::Critical => "▌".red(),
            Severity::Caution => "▌".yellow(),
        };
        println!("{} {}", marker, check.title.bold());
        println!("{} {}", marker, check.detail.dimmed());
        println!();
    }
}
