//! Static portfolio content rendered by the page components.

pub const OWNER: &str = "Alex Morgan";
pub const ROLE: &str = "Software Engineer";
pub const TAGLINE: &str = "I build reliable backend systems and fast, accessible interfaces.";
pub const ABOUT: &str = "Engineer with a focus on distributed systems, developer tooling, and \
    data-heavy web applications. I enjoy turning vague problems into small, well-tested services.";

pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "about", label: "About" },
    NavLink { id: "skills", label: "Skills" },
    NavLink { id: "projects", label: "Projects" },
    NavLink { id: "education", label: "Education" },
    NavLink { id: "achievements", label: "Achievements" },
    NavLink { id: "contact", label: "Contact" },
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent; drives the skill bar width.
    pub level: u8,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &[
            Skill { name: "Rust", level: 85 },
            Skill { name: "TypeScript", level: 80 },
            Skill { name: "Python", level: 75 },
            Skill { name: "SQL", level: 70 },
        ],
    },
    SkillGroup {
        title: "Platforms",
        skills: &[
            Skill { name: "PostgreSQL", level: 75 },
            Skill { name: "Docker", level: 70 },
            Skill { name: "Linux", level: 80 },
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Collaborative Editor",
        summary: "Shared document editor with websocket sync, presence, and undo history.",
        tags: &["Rust", "WebSockets", "WASM"],
        link: Some("https://github.com/"),
    },
    Project {
        title: "Log Pipeline",
        summary: "Streaming ingestion service that batches, indexes, and tails application logs.",
        tags: &["Rust", "Tokio", "PostgreSQL"],
        link: None,
    },
    Project {
        title: "Budget Planner",
        summary: "Offline-first personal finance tracker with category insights.",
        tags: &["TypeScript", "IndexedDB"],
        link: None,
    },
];

pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: &[Education] = &[Education {
    school: "State University",
    degree: "B.S. Computer Science",
    period: "2016 – 2020",
}];

pub const ACHIEVEMENTS: &[&str] = &[
    "Finalist, regional collegiate programming contest",
    "Maintainer of an open-source terminal UI toolkit",
    "Speaker at a local systems programming meetup",
];

pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACTS: &[ContactLink] = &[
    ContactLink { label: "Email", value: "alex@example.com", href: "mailto:alex@example.com" },
    ContactLink { label: "GitHub", value: "github.com/alex-morgan", href: "https://github.com/alex-morgan" },
];
