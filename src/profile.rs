//! Static content for the page. Changing copy should only ever touch this file.

pub struct Profile {
    pub name: &'static str,
    pub statement: &'static str,
    pub subtext: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub avatar_url: &'static str,
    pub resume_url: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

pub struct Project {
    pub name: &'static str,
    pub tagline: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub technical_highlights: &'static [&'static str],
    pub impact: &'static str,
    pub next_steps: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub repo: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub image: Option<&'static str>,
    pub badges: &'static [&'static str],
}

pub struct SkillGroup {
    pub group: &'static str,
    pub items: &'static [&'static str],
}

pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Raimbek Alish",
    statement: "I build practical AI features and clean, fast interfaces.",
    subtext: "CS student at Bellevue College (transfer '26). Recently shipped a voice-enabled Jira assistant at DubHacks.",
    location: "Bellevue, WA, USA",
    email: "r.alish1975@gmail.com",
    avatar_url: "/images/avatar.png",
    resume_url: "/Raimbek_Internship_Resume.pdf",
    github_url: "https://github.com/raimbekalish",
    linkedin_url: "https://www.linkedin.com/in/raimbekalish/",
};

pub const HIGHLIGHTS: &[&str] = &[
    "DubHacks 2025 · Atlassian Grow track",
    "Shipped a voice AI assistant in 24h",
    "Java, Python, TypeScript, SQL",
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "JiraGenie — Voice AI for Jira",
        tagline: "Ask Jira anything: voice input, instant AI summaries, and insights.",
        problem: "Digging through Jira boards for status takes clicks, filters and context switching.",
        solution: "A Forge app that answers spoken questions about issues with short, actionable summaries.",
        technical_highlights: &[
            "Built on Atlassian Forge with UI Kit; Gemini for natural language understanding",
            "ElevenLabs for real-time speech-to-text and text-to-speech",
            "Issues fetched through Forge resolvers so credentials never reach the client",
        ],
        impact: "Shipped end to end in 24 hours at DubHacks; owned the voice pipeline, prompt logic and UI polish.",
        next_steps: Some("Stream partial answers while the model is still generating."),
        tech: &["Forge", "React", "Gemini", "ElevenLabs"],
        repo: Some("https://github.com/khyeo1011/dubhacks25"),
        demo: Some("https://devpost.com/software/untitled-project-rw9st8nfkbm3"),
        image: Some("https://d112y698adiu2z.cloudfront.net/photos/production/software_photos/003/864/768/datas/gallery.jpg"),
        badges: &["DubHacks 2025", "Atlassian Grow track"],
    },
    Project {
        name: "Burger211 — Dynamic Menu Builder",
        tagline: "OOP + HashMap + GUI: compose burgers with real-time API toppings.",
        problem: "A course project needed a menu model that stayed consistent as toppings changed.",
        solution: "A Java inheritance hierarchy for menu items with a HashMap-backed inventory and a Swing front end.",
        technical_highlights: &[
            "Clean separation of model and view",
            "Constraint checks with Big-O-aware lookups",
            "JUnit coverage on edge cases",
        ],
        impact: "Became the reference solution shared with classmates for the data-structures unit.",
        next_steps: None,
        tech: &["Java", "Swing", "JUnit"],
        repo: None,
        demo: None,
        image: None,
        badges: &[],
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        group: "Languages",
        items: &["Python", "Java", "JavaScript/TypeScript", "SQL", "HTML/CSS", "Shell Scripting"],
    },
    SkillGroup {
        group: "Frameworks",
        items: &["React", "Node.js", "Express", "TailwindCSS"],
    },
    SkillGroup {
        group: "AI/Cloud",
        items: &["Google Gemini", "OpenAI", "ElevenLabs", "Atlassian Forge"],
    },
    SkillGroup {
        group: "Tools",
        items: &["Git/GitHub", "VS Code", "Figma", "Notion"],
    },
];

pub const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Ship fast, then harden",
        description: "JiraGenie shipped in 24h with streaming. Get working code in front of users, iterate on real feedback.",
    },
    Principle {
        title: "Measure before optimizing",
        description: "Track what matters: inference latency, cache hit rates. Optimize based on data, not assumptions.",
    },
    Principle {
        title: "Design for failure",
        description: "Graceful degradation in voice interfaces when APIs fail. Retry logic and fallbacks for real-time streams.",
    },
    Principle {
        title: "Make it boring to maintain",
        description: "Standard patterns, clear docs, obvious structure. Easy to read means easy to change.",
    },
];

pub const SIGNATURE_LINE: &str = "Fast iteration loops. Boring infrastructure.";

pub const NOW: &str = "Finishing my transfer coursework, polishing JiraGenie after DubHacks, and looking for a summer 2026 software engineering internship.";

/// Accordion rule for the case-study list: at most one project open at a time.
pub fn toggle_expanded(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, 1), Some(1));
        assert_eq!(toggle_expanded(Some(1), 1), None);
        assert_eq!(toggle_expanded(Some(0), 1), Some(1));
    }

    #[test]
    fn test_projects_have_content() {
        assert!(!PROJECTS.is_empty());
        for p in PROJECTS {
            assert!(!p.name.is_empty());
            assert!(!p.tech.is_empty(), "{} lists no tech", p.name);
        }
    }
}
