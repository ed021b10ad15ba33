//! Guide session - the single owner of all interactive state
//!
//! Handlers take plain inputs and return values describing what changed, so
//! any front end (terminal, web view, tests) can render them.

use std::time::Instant;

use serde::Serialize;

use crate::core::config::GuideConfig;
use crate::core::section::Section;
use crate::core::troubleshooting::{IssueCategory, TroubleshootingPath};
use crate::error::Result;
use crate::nav::{self, Breadcrumb, MenuState, NavSettings, NavState, ScrollState, SectionLayout};
use crate::search::{build_index, run_query, Highlighter, QueryDebouncer, SearchIndex, SearchOutcome};
use crate::tracker::{Progress, StepChange, StepTracker};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepUpdate {
    pub change: StepChange,
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavUpdate {
    #[serde(flatten)]
    pub state: NavState,
    pub breadcrumb: Option<Breadcrumb>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char { ch: char, alt: bool },
    Escape,
}

pub struct GuideSession {
    index: SearchIndex,
    highlighter: Highlighter,
    debouncer: QueryDebouncer,
    tracker: StepTracker,
    layouts: Vec<SectionLayout>,
    nav_settings: NavSettings,
    menu: MenuState,
}

impl GuideSession {
    /// Build the search index and fresh step state
    pub fn new(sections: &[Section], config: &GuideConfig) -> Self {
        let index = build_index(sections);
        tracing::info!(entries = index.len(), steps = config.total_steps, "guide session ready");

        Self {
            index,
            highlighter: Highlighter::new(&config.highlight_open, &config.highlight_close),
            debouncer: QueryDebouncer::new(config.debounce()),
            tracker: StepTracker::new(config.total_steps),
            layouts: Vec::new(),
            nav_settings: NavSettings {
                scroll_offset: config.scroll_offset,
                back_to_top_threshold: config.back_to_top_threshold,
            },
            menu: MenuState::default(),
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn tracker(&self) -> &StepTracker {
        &self.tracker
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuState {
        &mut self.menu
    }

    /// Replace the index wholesale; any pending query is dropped
    pub fn reindex(&mut self, sections: &[Section]) {
        self.index = build_index(sections);
        self.debouncer.clear();
        tracing::info!(entries = self.index.len(), "search index rebuilt");
    }

    pub fn on_query_changed(&self, text: &str) -> SearchOutcome<'_> {
        run_query(&self.index, text, &self.highlighter)
    }

    /// Debounced input: schedule `text`, superseding any pending query
    pub fn on_keystroke(&mut self, text: &str, now: Instant) {
        self.debouncer.push(text, now);
    }

    /// Evaluate the pending query if typing has paused long enough
    pub fn poll(&mut self, now: Instant) -> Option<SearchOutcome<'_>> {
        let query = self.debouncer.take_ready(now)?;
        Some(run_query(&self.index, &query, &self.highlighter))
    }

    pub fn on_step_toggled(&mut self, step: u32) -> Result<StepUpdate> {
        let change = self.tracker.toggle(step)?;
        Ok(self.step_update(change))
    }

    pub fn on_step_completed(&mut self, step: u32) -> Result<StepUpdate> {
        let change = self.tracker.mark_complete(step)?;
        Ok(self.step_update(change))
    }

    fn step_update(&self, change: StepChange) -> StepUpdate {
        StepUpdate {
            change,
            progress: self.tracker.progress(),
        }
    }

    pub fn on_issue_selected(&self, category: IssueCategory) -> &'static TroubleshootingPath {
        tracing::debug!(%category, "troubleshooting path selected");
        category.path()
    }

    pub fn set_layouts(&mut self, layouts: Vec<SectionLayout>) {
        self.layouts = layouts;
    }

    pub fn on_scroll(&self, state: &ScrollState) -> NavUpdate {
        let nav = nav::nav_state(&self.layouts, state, &self.nav_settings);
        let breadcrumb = nav
            .active_section
            .as_deref()
            .and_then(|id| self.breadcrumb_for(id));

        NavUpdate {
            state: nav,
            breadcrumb,
        }
    }

    /// Keyboard shortcuts. Returns the anchor to scroll to, if any.
    pub fn on_key(&mut self, key: Key) -> Option<&'static str> {
        match key {
            Key::Escape => {
                self.menu.on_escape();
                None
            }
            Key::Char { ch, alt } => {
                let anchor = nav::quick_jump(ch, alt)?;
                self.menu.on_navigate();
                Some(anchor)
            }
        }
    }

    /// A navigation link was followed; closes menus and returns the new breadcrumb
    pub fn on_nav_link(&mut self, anchor: &str) -> Option<Breadcrumb> {
        self.menu.on_navigate();
        self.breadcrumb_for(anchor.trim_start_matches('#'))
    }

    fn breadcrumb_for(&self, id: &str) -> Option<Breadcrumb> {
        self.index
            .get(id)
            .map(|entry| Breadcrumb::for_section(&entry.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("overview", "Overview", "OMEGAMON deployment steps"),
            Section::new("security", "Security Setup", "APF authorization details"),
        ]
    }

    fn session() -> GuideSession {
        GuideSession::new(&sections(), &GuideConfig::default())
    }

    #[test]
    fn test_query_changed() {
        let session = session();
        match session.on_query_changed("secur") {
            SearchOutcome::Results(result) => {
                assert_eq!(result.hits.len(), 1);
                assert_eq!(result.hits[0].entry.anchor, "#security");
                assert_eq!(result.hits[0].highlighted_title, "<mark>Secur</mark>ity Setup");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(session.on_query_changed("z"), SearchOutcome::Hidden);
    }

    #[test]
    fn test_debounced_keystrokes() {
        let mut session = session();
        let start = Instant::now();
        session.on_keystroke("o", start);
        session.on_keystroke("om", start + Duration::from_millis(120));
        session.on_keystroke("omeg", start + Duration::from_millis(200));

        assert!(session.poll(start + Duration::from_millis(400)).is_none());

        let outcome = session.poll(start + Duration::from_millis(500)).unwrap();
        match outcome {
            SearchOutcome::Results(result) => {
                assert_eq!(result.query, "omeg");
                assert_eq!(result.hits[0].entry.id, "overview");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(session.poll(start + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_reindex_replaces_index() {
        let mut session = session();
        session.reindex(&[Section::new("monitoring", "Monitoring", "CICS workloads")]);
        assert_eq!(session.index().len(), 1);
        assert!(matches!(session.on_query_changed("secur"), SearchOutcome::NoResults { .. }));
    }

    #[test]
    fn test_step_handlers() {
        let mut session = session();
        session.on_step_completed(1).unwrap();
        session.on_step_completed(2).unwrap();

        let update = session.on_step_completed(3).unwrap();
        assert_eq!(update.progress.current_step, 4);
        assert_eq!(update.progress.label(), "Step 4 of 14 (3 completed)");

        let update = session.on_step_toggled(3).unwrap();
        assert_eq!(update.change, StepChange::Reopened { step: 3 });
        assert_eq!(update.progress.current_step, 4);
        assert_eq!(update.progress.completed, 2);

        assert!(session.on_step_toggled(99).is_err());
    }

    #[test]
    fn test_issue_selected() {
        let session = session();
        let path = session.on_issue_selected(IssueCategory::Deployment);
        assert_eq!(path.heading, "Deployment Issue Resolution");
    }

    #[test]
    fn test_scroll_updates_breadcrumb() {
        let mut session = session();
        session.set_layouts(vec![
            SectionLayout::new("overview", 0.0, 1000.0),
            SectionLayout::new("security", 1000.0, 1000.0),
        ]);

        let update = session.on_scroll(&ScrollState {
            scroll_y: 1200.0,
            viewport_height: 800.0,
            document_height: 2000.0,
        });
        assert_eq!(update.state.active_section.as_deref(), Some("security"));
        assert_eq!(update.breadcrumb.unwrap().render(), "Home / Security Setup");
        assert_eq!(update.state.progress_percent, 100.0);
    }

    #[test]
    fn test_keys_and_links_close_menus() {
        let mut session = session();
        session.menu_mut().toggle_mobile();
        assert_eq!(session.on_key(Key::Char { ch: '6', alt: true }), Some("#security"));
        assert!(!session.menu().mobile_open);

        session.menu_mut().toggle_mobile();
        assert_eq!(session.on_key(Key::Escape), None);
        assert!(!session.menu().mobile_open);

        let crumb = session.on_nav_link("#overview").unwrap();
        assert_eq!(crumb.current, "Overview");
        assert!(session.on_nav_link("#resources").is_none());
    }
}
