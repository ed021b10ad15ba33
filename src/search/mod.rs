//! Section search for the deployment guide
//!
//! The index is built once from the page's sections; queries are plain
//! case-insensitive substring filters over it.

pub mod debounce;
pub mod index;
pub mod query;

pub use debounce::QueryDebouncer;
pub use index::{build_index, IndexEntry, SearchIndex};
pub use query::{
    run_query, search, Highlighter, QueryResult, SearchHit, SearchOutcome, MAX_RESULTS, MIN_QUERY_LEN,
};
