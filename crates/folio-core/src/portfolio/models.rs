use serde::{Deserialize, Serialize};

/// Page sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn position(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    Frontend,
    Backend,
    FullStack,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Frontend => "Frontend",
            ProjectKind::Backend => "Backend",
            ProjectKind::FullStack => "Full-Stack",
        }
    }

    /// Single-glyph badge for the card corner
    pub fn glyph(&self) -> &'static str {
        match self {
            ProjectKind::Frontend => "◍",
            ProjectKind::Backend => "▤",
            ProjectKind::FullStack => "</>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Live demo URL
    pub demo: String,
    pub kind: ProjectKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Words cycled by the hero typewriter
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<ContactChannel>,
}

fn default_greeting() -> String {
    "Hello, I'm".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub summary: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Optional hex accent used for the skill chip
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Email,
    Phone,
    Location,
    Link,
}

impl ChannelKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            ChannelKind::Email => "✉",
            ChannelKind::Phone => "☎",
            ChannelKind::Location => "⌂",
            ChannelKind::Link => "↗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub label: String,
    pub value: String,
    /// Openable target (mailto:, tel:, https:); locations usually have none
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub intro: String,
    #[serde(default)]
    pub channels: Vec<ContactChannel>,
}
