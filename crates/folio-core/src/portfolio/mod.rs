mod content;
pub mod models;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::{Error, Result};

pub use models::{
    About, ChannelKind, Contact, ContactChannel, Feature, Profile, Project, ProjectKind, Section,
    Skill,
};

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl Default for Portfolio {
    fn default() -> Self {
        content::builtin()
    }
}

impl Portfolio {
    /// Load portfolio content from a `.toml` or `.json` file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let portfolio: Self = if is_json {
            serde_json::from_str(&raw)?
        } else {
            toml::from_str(&raw).map_err(|e| Error::Content(e.to_string()))?
        };

        portfolio.validate()?;
        info!(
            "Loaded portfolio from {} ({} projects, {} skills)",
            path.display(),
            portfolio.projects.len(),
            portfolio.skills.len()
        );
        Ok(portfolio)
    }

    /// Load from `path` when given, otherwise fall back to the built-in content
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No content file configured, using built-in portfolio");
                Ok(Self::default())
            }
        }
    }

    /// Check names are present and every link parses
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::Content("profile.name must not be empty".to_string()));
        }

        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(Error::Content(format!("projects[{}] has an empty title", i)));
            }
            Url::parse(&project.demo).map_err(|e| {
                Error::Content(format!("project \"{}\" demo link: {}", project.title, e))
            })?;
        }

        let channels = self.profile.links.iter().chain(self.contact.channels.iter());
        for channel in channels {
            if let Some(href) = &channel.href {
                Url::parse(href).map_err(|e| {
                    Error::Content(format!("channel \"{}\" link: {}", channel.label, e))
                })?;
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
