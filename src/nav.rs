/// Vertical extent of a page section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: &'static str, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Window and document measurements taken at a scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// First section (in the given order) containing `scroll_y + lookahead`.
pub fn active_section(
    scroll_y: f64,
    lookahead: f64,
    sections: &[SectionBounds],
) -> Option<&'static str> {
    let reference = scroll_y + lookahead;
    sections
        .iter()
        .find(|s| s.contains(reference))
        .map(|s| s.id)
}

/// Percentage of the scrollable height consumed, always within `[0, 100]`.
pub fn scroll_progress(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let progress = 100.0 * metrics.scroll_y / scrollable;
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Events that dismiss the open mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent<'a> {
    Key(&'a str),
    /// `inside` is whether the click landed within the nav container.
    Click { inside: bool },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    active_section: Option<&'static str>,
    scroll_progress: f64,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Option<&'static str> {
        self.active_section
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == Some(id)
    }

    pub fn on_scroll(&mut self, metrics: &ScrollMetrics, lookahead: f64, sections: &[SectionBounds]) {
        self.active_section = active_section(metrics.scroll_y, lookahead, sections);
        self.scroll_progress = scroll_progress(metrics);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Picking a nav item always closes the menu. The link's anchor does the scrolling.
    pub fn select(&mut self) {
        self.menu_open = false;
    }

    /// Whether Escape / outside-click listeners should currently be attached.
    pub fn wants_dismiss_listeners(&self) -> bool {
        self.menu_open
    }

    /// Returns true if the event closed the menu.
    pub fn on_menu_event(&mut self, event: MenuEvent<'_>) -> bool {
        if !self.menu_open {
            return false;
        }
        let close = match event {
            MenuEvent::Key(key) => key == "Escape",
            MenuEvent::Click { inside } => !inside,
        };
        if close {
            self.menu_open = false;
        }
        close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("work", 0.0, 100.0),
            SectionBounds::new("skills", 100.0, 200.0),
            SectionBounds::new("now", 300.0, 300.0),
        ]
    }

    #[test]
    fn test_active_section_uses_lookahead() {
        let sections = sample_sections();
        assert_eq!(active_section(150.0, 100.0, &sections), Some("skills"));
        assert_eq!(active_section(-50.0, 100.0, &sections), Some("work"));
        assert_eq!(active_section(1000.0, 100.0, &sections), None);
    }

    #[test]
    fn test_section_bounds_are_half_open() {
        let sections = sample_sections();
        // 100 is the start of skills, not the end of work
        assert_eq!(active_section(0.0, 100.0, &sections), Some("skills"));
        assert_eq!(active_section(499.0, 100.0, &sections), Some("now"));
        assert_eq!(active_section(500.0, 100.0, &sections), None);
    }

    #[test]
    fn test_first_listed_section_wins_on_overlap() {
        let sections = vec![
            SectionBounds::new("contact", 0.0, 500.0),
            SectionBounds::new("now", 200.0, 100.0),
        ];
        assert_eq!(active_section(150.0, 100.0, &sections), Some("contact"));
    }

    #[test]
    fn test_above_first_section_is_none() {
        let sections = vec![SectionBounds::new("work", 400.0, 200.0)];
        assert_eq!(active_section(0.0, 100.0, &sections), None);
        assert_eq!(active_section(0.0, 100.0, &[]), None);
    }

    #[test]
    fn test_scroll_progress_is_clamped() {
        let mut metrics = ScrollMetrics {
            scroll_y: 0.0,
            document_height: 2000.0,
            viewport_height: 1000.0,
        };
        for (y, expected) in [
            (-100.0, 0.0),
            (0.0, 0.0),
            (250.0, 25.0),
            (1000.0, 100.0),
            (1003.5, 100.0),
        ] {
            metrics.scroll_y = y;
            assert_eq!(scroll_progress(&metrics), expected, "scroll_y = {y}");
        }
    }

    #[test]
    fn test_scroll_progress_unscrollable_document_is_zero() {
        let equal = ScrollMetrics {
            scroll_y: 0.0,
            document_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(scroll_progress(&equal), 0.0);

        let shorter = ScrollMetrics {
            scroll_y: 10.0,
            document_height: 500.0,
            viewport_height: 800.0,
        };
        assert_eq!(scroll_progress(&shorter), 0.0);

        let nan = ScrollMetrics {
            scroll_y: f64::NAN,
            document_height: 2000.0,
            viewport_height: 800.0,
        };
        assert_eq!(scroll_progress(&nan), 0.0);
    }

    #[test]
    fn test_on_scroll_updates_both_values() {
        let mut nav = NavState::new();
        let metrics = ScrollMetrics {
            scroll_y: 150.0,
            document_height: 1600.0,
            viewport_height: 600.0,
        };
        nav.on_scroll(&metrics, 100.0, &sample_sections());
        assert_eq!(nav.active_section(), Some("skills"));
        assert!(nav.is_active("skills"));
        assert!(!nav.is_active("work"));
        assert_eq!(nav.scroll_progress(), 15.0);

        // progress is still computed when no section matches
        let past = ScrollMetrics {
            scroll_y: 1000.0,
            ..metrics
        };
        nav.on_scroll(&past, 100.0, &sample_sections());
        assert_eq!(nav.active_section(), None);
        assert_eq!(nav.scroll_progress(), 100.0);
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.wants_dismiss_listeners());

        assert!(!nav.on_menu_event(MenuEvent::Key("Enter")));
        assert!(nav.menu_open());

        assert!(nav.on_menu_event(MenuEvent::Key("Escape")));
        assert!(!nav.menu_open());
        assert!(!nav.wants_dismiss_listeners());
    }

    #[test]
    fn test_outside_click_closes_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();

        assert!(!nav.on_menu_event(MenuEvent::Click { inside: true }));
        assert!(nav.menu_open());

        assert!(nav.on_menu_event(MenuEvent::Click { inside: false }));
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_events_ignored_while_closed() {
        let mut nav = NavState::new();
        assert!(!nav.on_menu_event(MenuEvent::Key("Escape")));
        assert!(!nav.on_menu_event(MenuEvent::Click { inside: false }));
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_select_closes_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        nav.select();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }
}
