//! Shell command - line-based interactive session over the guide

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::*;

use omegamon_guide::search::SearchOutcome;
use omegamon_guide::session::{GuideSession, Key};
use omegamon_guide::IssueCategory;

use super::Context;

enum ShellCommand {
    Query(String),
    Done(u32),
    Toggle(u32),
    Progress,
    Issue(String),
    Jump(char),
    Help,
    Quit,
    Invalid(String),
}

fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    // a doubled colon searches for text that itself starts with ':'
    if let Some(query) = line.strip_prefix("::") {
        return ShellCommand::Query(format!(":{}", query));
    }
    let Some(rest) = line.strip_prefix(':') else {
        return ShellCommand::Query(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or("");
    let arg = parts.next();

    let step = |arg: Option<&str>| arg.and_then(|a| a.parse::<u32>().ok());

    let command = match (name, arg) {
        ("done", a) => step(a).map(ShellCommand::Done),
        ("toggle", a) => step(a).map(ShellCommand::Toggle),
        ("progress", _) => Some(ShellCommand::Progress),
        ("issue", Some(a)) => Some(ShellCommand::Issue(a.to_string())),
        ("jump", Some(a)) if a.chars().count() == 1 => a.chars().next().map(ShellCommand::Jump),
        ("help", _) => Some(ShellCommand::Help),
        ("quit", _) | ("q", _) => Some(ShellCommand::Quit),
        _ => None,
    };
    command.unwrap_or_else(|| ShellCommand::Invalid(line.to_string()))
}

pub fn run(ctx: &Context) -> Result<()> {
    let sections = ctx.sections()?;
    let mut session = GuideSession::new(&sections, &ctx.config);

    println!(
        "{} {} sections indexed. Type to search, {} for commands.",
        "OMEGAMON Deployment Guide".bold(),
        session.index().len().to_string().cyan(),
        ":help".cyan()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", "guide>".dimmed());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_line(&line) {
            ShellCommand::Quit => break,
            ShellCommand::Help => print_help(),
            ShellCommand::Query(q) => print_outcome(&session.on_query_changed(&q)),
            ShellCommand::Done(step) => match session.on_step_completed(step) {
                Ok(update) => {
                    if let Some(message) = update.change.notification() {
                        println!("{} {}", "✓".green(), message);
                    }
                    println!("{}", update.progress.label());
                }
                Err(e) => println!("{} {}", "✗".red(), e),
            },
            ShellCommand::Toggle(step) => match session.on_step_toggled(step) {
                Ok(update) => println!("{}", update.progress.label()),
                Err(e) => println!("{} {}", "✗".red(), e),
            },
            ShellCommand::Progress => println!("{}", session.tracker().progress().label()),
            ShellCommand::Issue(name) => match name.parse::<IssueCategory>() {
                Ok(category) => {
                    let path = session.on_issue_selected(category);
                    println!("{}", path.heading.bold());
                    for check in path.checks {
                        println!("  {} {}", "•".cyan(), check.title);
                        println!("    {}", check.detail.dimmed());
                    }
                }
                Err(e) => println!("{} {}", "✗".red(), e),
            },
            ShellCommand::Jump(ch) => match session.on_key(Key::Char { ch, alt: true }) {
                Some(anchor) => {
                    let crumb = session
                        .on_nav_link(anchor)
                        .map(|c| c.render())
                        .unwrap_or_else(|| "(section not on this page)".to_string());
                    println!("{} {}", anchor.cyan(), crumb);
                }
                None => println!("{} No quick-jump target for {}", "✗".red(), ch),
            },
            ShellCommand::Invalid(text) => {
                println!("{} Unrecognized command: {}", "✗".red(), text);
            }
        }
    }

    Ok(())
}

fn print_outcome(outcome: &SearchOutcome<'_>) {
    match outcome {
        SearchOutcome::Hidden => {}
        SearchOutcome::NoResults { .. } => println!("{}", "No results found".yellow()),
        SearchOutcome::Results(result) => {
            for hit in &result.hits {
                println!("  {} {}", hit.highlighted_title, hit.entry.anchor.dimmed());
            }
        }
    }
}

fn print_help() {
    println!("  {}  search section titles and text", "<text>".cyan());
    println!("  {}  search for text starting with ':'", "::<text>".cyan());
    println!("  {}  mark a deployment step complete", ":done N".cyan());
    println!("  {}  toggle a deployment step", ":toggle N".cyan());
    println!("  {}  show step progress", ":progress".cyan());
    println!("  {}  deployment | performance | connectivity", ":issue NAME".cyan());
    println!("  {}  jump to section N (1-7)", ":jump N".cyan());
    println!("  {}  leave the shell", ":quit".cyan());
}
