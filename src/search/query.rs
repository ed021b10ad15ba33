//! Query Engine - substring filter over the index with title highlighting

use regex::{Captures, RegexBuilder};

use super::index::{IndexEntry, SearchIndex};

/// Queries shorter than this (in characters) hide the result list
pub const MIN_QUERY_LEN: usize = 2;
/// Fixed result cap
pub const MAX_RESULTS: usize = 5;

/// One matched entry plus its title with the query marked up
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub entry: &'a IndexEntry,
    pub highlighted_title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub query: String,
    pub hits: Vec<SearchHit<'a>>,
}

/// What the caller should render for a query
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Query too short; hide the result list
    Hidden,
    /// Show a single "No results found" placeholder
    NoResults { query: String },
    Results(QueryResult<'a>),
}

/// Wraps matched text in an open/close marker pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    open: String,
    close: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new("<mark>", "</mark>")
    }
}

impl Highlighter {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Mark every case-insensitive occurrence of `query` in `text`.
    ///
    /// The query is matched literally; pattern metacharacters are escaped.
    pub fn highlight(&self, text: &str, query: &str) -> String {
        if query.is_empty() {
            return text.to_string();
        }

        let re = match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!(query, error = %e, "could not build highlight pattern");
                return text.to_string();
            }
        };

        re.replace_all(text, |caps: &Captures| {
            format!("{}{}{}", self.open, &caps[0], self.close)
        })
        .into_owned()
    }
}

/// Entries whose title or body contains `query`, case-insensitively.
///
/// Index order is kept and at most [`MAX_RESULTS`] entries are returned.
/// Queries shorter than [`MIN_QUERY_LEN`] return nothing.
pub fn search<'a>(index: &'a SearchIndex, query: &str) -> Vec<&'a IndexEntry> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    index
        .entries()
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle) || entry.normalized_body.contains(&needle)
        })
        .take(MAX_RESULTS)
        .collect()
}

/// Run a query and package the outcome for rendering
pub fn run_query<'a>(
    index: &'a SearchIndex,
    query: &str,
    highlighter: &Highlighter,
) -> SearchOutcome<'a> {
    if query.chars().count() < MIN_QUERY_LEN {
        return SearchOutcome::Hidden;
    }

    let matches = search(index, query);
    tracing::debug!(query, matches = matches.len(), "evaluated query");

    if matches.is_empty() {
        return SearchOutcome::NoResults {
            query: query.to_string(),
        };
    }

    let hits = matches
        .into_iter()
        .map(|entry| SearchHit {
            entry,
            highlighted_title: highlighter.highlight(&entry.title, query),
        })
        .collect();

    SearchOutcome::Results(QueryResult {
        query: query.to_string(),
        hits,
    })
}
