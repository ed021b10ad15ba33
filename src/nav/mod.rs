//! Page navigation state: scroll-spy, reading progress, quick jump and menus

use serde::Serialize;

use crate::core::config::{DEFAULT_BACK_TO_TOP_THRESHOLD, DEFAULT_SCROLL_OFFSET};

/// Anchors reachable with Alt+1 .. Alt+7, in key order
pub const QUICK_JUMP_TARGETS: [(&str, &str); 7] = [
    ("#overview", "Overview"),
    ("#implementation", "Implementation"),
    ("#configuration", "Configuration"),
    ("#virtual-cics", "Virtual CICS"),
    ("#monitoring", "Monitoring"),
    ("#security", "Security"),
    ("#resources", "Resources"),
];

pub const HOME_ANCHOR: &str = "#overview";

/// Vertical extent of a rendered section, in page pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionLayout {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavState {
    pub active_section: Option<String>,
    pub progress_percent: f64,
    pub back_to_top_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavSettings {
    pub scroll_offset: f64,
    pub back_to_top_threshold: f64,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
        }
    }
}

/// Section under the header line. When layouts overlap the last one wins.
pub fn active_section(layouts: &[SectionLayout], scroll_y: f64, offset: f64) -> Option<&str> {
    let probe = scroll_y + offset;
    layouts
        .iter()
        .rev()
        .find(|l| l.contains(probe))
        .map(|l| l.id.as_str())
}

/// How far through the document the reader is, 0..=100
pub fn reading_progress(state: &ScrollState) -> f64 {
    let scrollable = state.document_height - state.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (state.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn nav_state(layouts: &[SectionLayout], state: &ScrollState, settings: &NavSettings) -> NavState {
    NavState {
        active_section: active_section(layouts, state.scroll_y, settings.scroll_offset)
            .map(String::from),
        progress_percent: reading_progress(state),
        back_to_top_visible: back_to_top_visible(state.scroll_y, settings.back_to_top_threshold),
    }
}

/// Anchor for an Alt+digit shortcut
pub fn quick_jump(key: char, alt: bool) -> Option<&'static str> {
    if !alt {
        return None;
    }
    let index = key.to_digit(10)?.checked_sub(1)? as usize;
    QUICK_JUMP_TARGETS.get(index).map(|(anchor, _)| *anchor)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub home: &'static str,
    pub current: String,
}

impl Breadcrumb {
    pub fn for_section(title: &str) -> Self {
        Self {
            home: HOME_ANCHOR,
            current: title.trim().to_string(),
        }
    }

    pub fn render(&self) -> String {
        format!("Home / {}", self.current)
    }
}

/// Open/closed state of the mobile menu and the quick-jump popup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub mobile_open: bool,
    pub quick_jump_open: bool,
}

impl MenuState {
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn toggle_quick_jump(&mut self) {
        self.quick_jump_open = !self.quick_jump_open;
    }

    /// Following any navigation link closes both menus
    pub fn on_navigate(&mut self) {
        self.mobile_open = false;
        self.quick_jump_open = false;
    }

    pub fn on_escape(&mut self) {
        self.mobile_open = false;
    }

    pub fn on_click_outside(&mut self) {
        self.quick_jump_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layouts() -> Vec<SectionLayout> {
        vec![
            SectionLayout::new("overview", 0.0, 800.0),
            SectionLayout::new("implementation", 800.0, 1200.0),
            SectionLayout::new("security", 2000.0, 600.0),
        ]
    }

    #[test]
    fn test_active_section_uses_offset() {
        let layouts = layouts();
        assert_eq!(active_section(&layouts, 0.0, 150.0), Some("overview"));
        assert_eq!(active_section(&layouts, 649.0, 150.0), Some("overview"));
        assert_eq!(active_section(&layouts, 650.0, 150.0), Some("implementation"));
        assert_eq!(active_section(&layouts, 5000.0, 150.0), None);
    }

    #[test]
    fn test_active_section_last_overlap_wins() {
        let layouts = vec![
            SectionLayout::new("outer", 0.0, 1000.0),
            SectionLayout::new("inner", 100.0, 200.0),
        ];
        assert_eq!(active_section(&layouts, 0.0, 150.0), Some("inner"));
    }

    #[test]
    fn test_reading_progress() {
        let state = ScrollState {
            scroll_y: 500.0,
            viewport_height: 1000.0,
            document_height: 3000.0,
        };
        assert_eq!(reading_progress(&state), 25.0);

        let short_page = ScrollState {
            scroll_y: 0.0,
            viewport_height: 1000.0,
            document_height: 800.0,
        };
        assert_eq!(reading_progress(&short_page), 0.0);

        let overscrolled = ScrollState {
            scroll_y: 2500.0,
            ..state
        };
        assert_eq!(reading_progress(&overscrolled), 100.0);
    }

    #[test]
    fn test_nav_state() {
        let state = ScrollState {
            scroll_y: 900.0,
            viewport_height: 1000.0,
            document_height: 2600.0,
        };
        let nav = nav_state(&layouts(), &state, &NavSettings::default());
        assert_eq!(nav.active_section.as_deref(), Some("implementation"));
        assert!(nav.back_to_top_visible);
        assert!(!back_to_top_visible(300.0, 300.0));
    }

    #[test]
    fn test_quick_jump() {
        assert_eq!(quick_jump('1', true), Some("#overview"));
        assert_eq!(quick_jump('4', true), Some("#virtual-cics"));
        assert_eq!(quick_jump('7', true), Some("#resources"));
        assert_eq!(quick_jump('8', true), None);
        assert_eq!(quick_jump('0', true), None);
        assert_eq!(quick_jump('1', false), None);
        assert_eq!(quick_jump('x', true), None);
    }

    #[test]
    fn test_breadcrumb() {
        let crumb = Breadcrumb::for_section("  Security Setup ");
        assert_eq!(crumb.home, "#overview");
        assert_eq!(crumb.render(), "Home / Security Setup");
    }

    #[test]
    fn test_menu_state() {
        let mut menu = MenuState::default();
        menu.toggle_mobile();
        menu.toggle_quick_jump();
        assert!(menu.mobile_open && menu.quick_jump_open);

        menu.on_escape();
        assert!(!menu.mobile_open);
        assert!(menu.quick_jump_open);

        menu.on_click_outside();
        assert!(!menu.quick_jump_open);

        menu.toggle_mobile();
        menu.on_navigate();
        assert_eq!(menu, MenuState::default());
    }
}
