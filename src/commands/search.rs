use anyhow::Result;
use colored::*;

use omegamon_guide::search::{build_index, run_query, Highlighter, SearchOutcome, MIN_QUERY_LEN};

use super::{truncate, Context};

pub fn run(ctx: &Context, query: &str, json: bool) -> Result<()> {
    let sections = ctx.sections()?;
    let index = build_index(&sections);

    let highlighter = if json {
        Highlighter::new(&ctx.config.highlight_open, &ctx.config.highlight_close)
    } else if colored::control::SHOULD_COLORIZE.should_colorize() {
        Highlighter::new("\x1b[1;33m", "\x1b[0m")
    } else {
        Highlighter::new("[", "]")
    };

    let outcome = run_query(&index, query, &highlighter);

    if json {
        let results: Vec<_> = match &outcome {
            SearchOutcome::Results(result) => result
                .hits
                .iter()
                .map(|hit| {
                    serde_json::json!({
                        "id": hit.entry.id,
                        "title": hit.entry.title,
                        "highlighted_title": hit.highlighted_title,
                        "anchor": hit.entry.anchor,
                    })
                })
                .collect(),
            _ => Vec::new(),
        };
        println!(
            "{}",
            serde_json::json!({
                "query": query,
                "hidden": outcome == SearchOutcome::Hidden,
                "results": results,
            })
        );
        return Ok(());
    }

    println!("{}", "Search Results".bold());
    println!("{}", "=".repeat(60));
    println!("Query: \"{}\"", query);
    println!();

    match outcome {
        SearchOutcome::Hidden => {
            println!(
                "{}",
                format!("Type at least {} characters to search.", MIN_QUERY_LEN).yellow()
            );
        }
        SearchOutcome::NoResults { .. } => {
            println!("{}", "No results found".yellow());
        }
        SearchOutcome::Results(result) => {
            let needle = query.to_lowercase();
            for hit in &result.hits {
                println!("{} {}", hit.highlighted_title, hit.entry.anchor.dimmed());
                if let Some(context) = snippet(&hit.entry.normalized_body, &needle, 30) {
                    println!("  {}", truncate(&context, 80).dimmed());
                }
                println!();
            }
        }
    }

    Ok(())
}

/// Text around the first occurrence of `needle`, `context_chars` either side
fn snippet(body: &str, needle: &str, context_chars: usize) -> Option<String> {
    let byte_start = body.find(needle)?;
    let char_start = body[..byte_start].chars().count();
    let char_len = needle.chars().count();

    let start = char_start.saturating_sub(context_chars);
    let text: String = body
        .chars()
        .skip(start)
        .take(char_start - start + char_len + context_chars)
        .collect();

    Some(format!("...{}...", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_window() {
        let body = "check cxegnode majornode activation before starting";
        assert_eq!(
            snippet(body, "majornode", 6).as_deref(),
            Some("...gnode majornode activ...")
        );
        assert_eq!(snippet(body, "cics", 6), None);
    }

    #[test]
    fn test_snippet_at_start_and_multibyte() {
        assert_eq!(snippet("ändern apf", "ändern", 3).as_deref(), Some("...ändern ap..."));
    }
}
