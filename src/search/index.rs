//! Index Builder - turns page sections into searchable records

use serde::Serialize;

use crate::core::section::Section;

/// Searchable record derived from one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub id: String,
    pub title: String,
    /// Lower-cased body text, used for matching only
    #[serde(skip)]
    pub normalized_body: String,
    pub anchor: String,
}

impl IndexEntry {
    fn from_section(section: &Section) -> Option<Self> {
        if section.id.is_empty() || section.title.is_empty() {
            return None;
        }

        Some(Self {
            id: section.id.clone(),
            title: section.title.clone(),
            normalized_body: section.body.to_lowercase(),
            anchor: format!("#{}", section.id),
        })
    }
}

/// In-memory search index. Built once and replaced wholesale, never patched.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with the given id; duplicate ids resolve to the earliest
    pub fn get(&self, id: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Build the index from sections, skipping any without an id or title.
///
/// Input order is kept and duplicate ids are retained.
pub fn build_index(sections: &[Section]) -> SearchIndex {
    let entries: Vec<IndexEntry> = sections.iter().filter_map(IndexEntry::from_section).collect();

    tracing::debug!(
        sections = sections.len(),
        indexed = entries.len(),
        skipped = sections.len() - entries.len(),
        "built search index"
    );

    SearchIndex { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_index_skips_incomplete_sections() {
        let sections = vec![
            Section::new("overview", "Overview", "OMEGAMON Deployment Steps"),
            Section::new("", "Untitled anchorless", "body"),
            Section::new("hero", "", "banner"),
            Section::new("security", "Security Setup", "APF authorization details"),
        ];

        let index = build_index(&sections);
        assert_eq!(index.len(), 2);

        let ids: Vec<_> = index.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["overview", "security"]);

        let overview = index.get("overview").unwrap();
        assert_eq!(overview.anchor, "#overview");
        assert_eq!(overview.normalized_body, "omegamon deployment steps");
        assert_eq!(overview.title, "Overview");
    }

    #[test]
    fn test_build_index_keeps_duplicate_ids() {
        let sections = vec![
            Section::new("steps", "Steps", "first"),
            Section::new("steps", "Steps (continued)", "second"),
        ];

        let index = build_index(&sections);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("steps").unwrap().title, "Steps");
    }

    #[test]
    fn test_build_index_empty() {
        let index = build_index(&[]);
        assert!(index.is_empty());
        assert!(index.get("overview").is_none());
    }
}
