use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;
use thiserror::Error;

/// File inside `data/` holding the portfolio shipped with the site.
const PORTFOLIO_FILE: &str = "portfolio.json";

static STATIC_PORTFOLIO: LazyLock<PortfolioData> = LazyLock::new(|| {
    let content = DataAssets::get(PORTFOLIO_FILE).expect("Should be able to get portfolio data");
    let content = String::from_utf8(content.data.into()).expect("Couldn't read portfolio data");
    PortfolioData::from_json(&content).expect("Couldn't parse portfolio data")
});

#[derive(Embed)]
#[folder = "data"]
struct DataAssets;

/// The portfolio bundled into the binary.
pub fn static_portfolio() -> &'static PortfolioData {
    &STATIC_PORTFOLIO
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub stats: ProfileStats,
    #[serde(default)]
    pub social: BTreeMap<String, SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub experience: String,
    pub projects: String,
    pub clients: String,
    pub success_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub url: String,
    #[serde(alias = "username")]
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub icon: String,
    pub color: String,
    pub technologies: Vec<Technology>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    /// Proficiency percentage, expected in `0..=100`.
    pub level: u32,
    pub icon: String,
}

impl Technology {
    /// CSS width of the progress bar. Out of range levels are rendered as-is.
    pub fn fill_width(&self) -> String {
        format!("{}%", self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub live_url: String,
    #[serde(alias = "sourceUrl")]
    pub github_url: String,
    pub status: ProjectStatus,
    pub duration: String,
}

impl Project {
    /// Features shown on the hover overlay.
    pub fn highlights(&self) -> &[String] {
        &self.features[..self.features.len().min(3)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Completed,
    /// Any other label, e.g. "In Progress" or "Beta", kept verbatim.
    InProgress(String),
}

impl ProjectStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress(label) => label,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        if value == "Completed" {
            Self::Completed
        } else {
            Self::InProgress(value)
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub timezone: String,
    pub availability: String,
    pub response_time: String,
    #[serde(default)]
    pub social: BTreeMap<String, SocialLink>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataIssue {
    #[error("{group}/{technology}: level {level} is outside 0..=100")]
    LevelOutOfRange {
        group: String,
        technology: String,
        level: u32,
    },
    #[error("project id {0} is used more than once")]
    DuplicateProjectId(u32),
}

impl PortfolioData {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Collects every violation of the data invariants. Nothing is corrected.
    pub fn validate(&self) -> Vec<DataIssue> {
        let mut issues = self
            .skills
            .iter()
            .flat_map(|group| {
                group
                    .technologies
                    .iter()
                    .filter(|t| t.level > 100)
                    .map(move |t| DataIssue::LevelOutOfRange {
                        group: group.category.clone(),
                        technology: t.name.clone(),
                        level: t.level,
                    })
            })
            .collect::<Vec<_>>();

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                issues.push(DataIssue::DuplicateProjectId(project.id));
            }
        }
        issues
    }
}

/// Identity shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIdentity {
    pub name: String,
    pub experience: String,
    pub avatar: String,
    pub linkedin: String,
    pub github: String,
    pub email: String,
    pub phone: String,
}

impl Default for HeaderIdentity {
    fn default() -> Self {
        Self {
            name: "Alex Rivera".to_string(),
            experience: "1+ years experience".to_string(),
            avatar: "/avatar.svg".to_string(),
            linkedin: "https://www.linkedin.com/in/alexrivera-dev/".to_string(),
            github: "https://github.com/alexrivera-dev".to_string(),
            email: "hello@alexrivera.dev".to_string(),
            phone: "+1 (555) 010-4242".to_string(),
        }
    }
}

impl HeaderIdentity {
    /// Builds the header identity, taking the default for every blank field.
    pub fn from_portfolio(data: &PortfolioData) -> Self {
        let fallback = Self::default();
        let pick = |value: &str, default: String| {
            if value.trim().is_empty() {
                default
            } else {
                value.to_string()
            }
        };
        let social_url = |key: &str, default: String| {
            data.profile
                .social
                .get(key)
                .or_else(|| data.contact.social.get(key))
                .map(|link| pick(&link.url, default.clone()))
                .unwrap_or(default)
        };
        let experience = if data.profile.stats.experience.trim().is_empty() {
            fallback.experience
        } else {
            format!("{}+ years experience", data.profile.stats.experience.trim())
        };

        Self {
            name: pick(&data.profile.name, fallback.name),
            experience,
            avatar: fallback.avatar,
            linkedin: social_url("linkedin", fallback.linkedin),
            github: social_url("github", fallback.github),
            email: pick(&data.contact.email, fallback.email),
            phone: pick(&data.contact.phone, fallback.phone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_portfolio_is_valid() {
        let data = static_portfolio();
        assert!(!data.profile.name.is_empty());
        assert!(!data.skills.is_empty());
        assert!(!data.projects.is_empty());
        assert_eq!(data.validate(), vec![]);
        for group in &data.skills {
            for tech in &group.technologies {
                assert!(tech.level <= 100, "{} out of range", tech.name);
            }
        }
    }

    #[test]
    fn test_out_of_range_level_is_reported_not_clamped() {
        let mut data = static_portfolio().clone();
        data.skills[0].technologies[0].level = 140;

        let issues = data.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            DataIssue::LevelOutOfRange { level: 140, .. }
        ));
        assert_eq!(data.skills[0].technologies[0].fill_width(), "140%");
    }

    #[test]
    fn test_duplicate_project_ids() {
        let mut data = static_portfolio().clone();
        let mut dup = data.projects[0].clone();
        dup.title = "Copy".to_string();
        data.projects.push(dup);

        let issues = data.validate();
        assert_eq!(issues, vec![DataIssue::DuplicateProjectId(data.projects[0].id)]);
    }

    #[test]
    fn test_project_status_labels() {
        let status: ProjectStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert!(status.is_completed());

        let status: ProjectStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, ProjectStatus::InProgress("In Progress".to_string()));
        assert!(!status.is_completed());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"In Progress\"");
    }

    #[test]
    fn test_contact_social_accepts_username() {
        let link: SocialLink =
            serde_json::from_str(r#"{"url": "https://github.com/x", "username": "x"}"#).unwrap();
        assert_eq!(link.handle, "x");
    }

    #[test]
    fn test_highlights_take_first_three_features() {
        let data = static_portfolio();
        let project = data
            .projects
            .iter()
            .find(|p| p.features.len() > 3)
            .expect("sample data has a project with more than three features");
        assert_eq!(project.highlights(), &project.features[..3]);
    }

    #[test]
    fn test_header_identity_falls_back_on_blank_fields() {
        let mut data = static_portfolio().clone();
        data.profile.name = "  ".to_string();
        data.profile.stats.experience = String::new();
        data.profile.social.clear();
        data.contact.social.clear();

        let identity = HeaderIdentity::from_portfolio(&data);
        let fallback = HeaderIdentity::default();
        assert_eq!(identity.name, fallback.name);
        assert_eq!(identity.experience, fallback.experience);
        assert_eq!(identity.github, fallback.github);
        assert_eq!(identity.email, data.contact.email);
    }

    #[test]
    fn test_default_avatar_is_served() {
        let avatar = HeaderIdentity::default().avatar;
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(avatar.trim_start_matches('/'));
        assert!(path.is_file(), "{} missing", path.display());
    }

    #[test]
    fn test_header_identity_uses_profile() {
        let data = static_portfolio();
        let identity = HeaderIdentity::from_portfolio(data);
        assert_eq!(identity.name, data.profile.name);
        assert_eq!(
            identity.experience,
            format!("{}+ years experience", data.profile.stats.experience)
        );
        assert_eq!(identity.linkedin, data.profile.social["linkedin"].url);
    }
}
