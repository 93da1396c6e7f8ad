use chrono::{DateTime, Datelike, Utc};

/// Hosted form relay used when `FORM_RELAY_ENDPOINT` is not set at build time.
pub const DEFAULT_FORM_RELAY_ENDPOINT: &str = "https://formspree.io/f/xrbogqwn";

/// Distance below the viewport top (roughly the sticky header height) used to pick the active section.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// A section the top navigation tracks and links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

/// In page order. The page shell renders `<section id=..>` with exactly these ids.
pub const NAV_SECTIONS: [NavSection; 4] = [
    NavSection {
        id: "work",
        label: "Work",
    },
    NavSection {
        id: "skills",
        label: "Toolbox",
    },
    NavSection {
        id: "now",
        label: "Now",
    },
    NavSection {
        id: "contact",
        label: "Contact",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub form_relay_endpoint: String,
    pub scroll_lookahead: f64,
    pub sections: &'static [NavSection],
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_relay_endpoint: option_env!("FORM_RELAY_ENDPOINT")
                .unwrap_or(DEFAULT_FORM_RELAY_ENDPOINT)
                .to_string(),
            scroll_lookahead: SCROLL_LOOKAHEAD_PX,
            sections: &NAV_SECTIONS,
        }
    }
}

/// Build timestamp recorded by build.rs.
pub fn build_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

/// e.g. "October 2026"
pub fn last_updated_label(at: DateTime<Utc>) -> String {
    at.format("%B %Y").to_string()
}

pub fn copyright_year(at: DateTime<Utc>) -> i32 {
    at.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_sections_match_page_order() {
        let config = SiteConfig::default();
        let ids: Vec<_> = config.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["work", "skills", "now", "contact"]);
        assert_eq!(config.scroll_lookahead, 100.0);
        assert!(config.form_relay_endpoint.starts_with("http"));
    }

    #[test]
    fn test_last_updated_label() {
        let at = Utc.with_ymd_and_hms(2025, 10, 19, 12, 0, 0).unwrap();
        assert_eq!(last_updated_label(at), "October 2025");
        assert_eq!(copyright_year(at), 2025);
    }

    #[test]
    fn test_build_time_is_parsed() {
        // build.rs always stamps a valid RFC 3339 time
        assert!(build_time().year() >= 2024);
    }
}
