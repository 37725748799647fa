use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

pub const CONTENT_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::embedded);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file {0} is not embedded")]
    MissingAsset(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
    #[error("{entry}: field `{field}` is missing or empty")]
    MissingField { entry: String, field: &'static str },
    #[error("{entry}: skill level {level} is outside 0..=100")]
    LevelOutOfRange { entry: String, level: i64 },
    #[error("{entry}: `{link}` is not a valid URL ({reason})")]
    InvalidUrl {
        entry: String,
        link: String,
        reason: String,
    },
    #[error("{entry}: `{link}` uses unsupported scheme `{scheme}`")]
    UnsupportedScheme {
        entry: String,
        link: String,
        scheme: String,
    },
    #[error("{entry}: `{link}` points at a placeholder domain")]
    PlaceholderLink { entry: String, link: String },
    #[error("{entry}: project lists no technologies")]
    EmptyTech { entry: String },
}

/// The validated, process-wide content. Loaded once on first access.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

fn required(entry: &str, field: &'static str, value: Option<String>) -> Result<String, ContentError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ContentError::MissingField {
            entry: entry.to_string(),
            field,
        }),
    }
}

const RESERVED_DOMAINS: [&str; 3] = ["example.com", "example.org", "example.net"];

fn is_reserved_domain(host: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    RESERVED_DOMAINS
        .iter()
        .any(|d| host == *d || host.ends_with(&format!(".{d}")))
}

/// An absolute `http`, `https` or `mailto` target on a real domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link(Url);

impl Link {
    pub fn parse(entry: &str, raw: &str) -> Result<Self, ContentError> {
        let url = Url::parse(raw.trim()).map_err(|e| ContentError::InvalidUrl {
            entry: entry.to_string(),
            link: raw.to_string(),
            reason: e.to_string(),
        })?;
        let host = match url.scheme() {
            "http" | "https" => match url.host_str() {
                Some(host) if !host.is_empty() => host.to_string(),
                _ => {
                    return Err(ContentError::InvalidUrl {
                        entry: entry.to_string(),
                        link: raw.to_string(),
                        reason: "missing host".to_string(),
                    })
                }
            },
            "mailto" => match url.path().split_once('@') {
                Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                    domain.to_string()
                }
                _ => {
                    return Err(ContentError::InvalidUrl {
                        entry: entry.to_string(),
                        link: raw.to_string(),
                        reason: "missing mail address".to_string(),
                    })
                }
            },
            scheme => {
                return Err(ContentError::UnsupportedScheme {
                    entry: entry.to_string(),
                    link: raw.to_string(),
                    scheme: scheme.to_string(),
                })
            }
        };
        if is_reserved_domain(&host) {
            return Err(ContentError::PlaceholderLink {
                entry: entry.to_string(),
                link: raw.to_string(),
            });
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_mailto(&self) -> bool {
        self.0.scheme() == "mailto"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    headline: String,
    tagline: String,
    copyright_holder: String,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    pub fn copyright_holder(&self) -> &str {
        &self.copyright_holder
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    title: String,
    description: String,
    tech: Vec<String>,
    link: Link,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tech: impl IntoIterator<Item = impl Into<String>>,
        link: &str,
    ) -> Result<Self, ContentError> {
        let title = required("project", "title", Some(title.into()))?;
        let description = required(&title, "description", Some(description.into()))?;
        let tech = tech
            .into_iter()
            .map(|t| required(&title, "tech", Some(t.into())))
            .collect::<Result<Vec<_>, _>>()?;
        if tech.is_empty() {
            return Err(ContentError::EmptyTech { entry: title });
        }
        let link = Link::parse(&title, link)?;
        Ok(Self {
            title,
            description,
            tech,
            link,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tech(&self) -> &[String] {
        &self.tech
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLevel {
    name: String,
    level: u8,
}

impl SkillLevel {
    pub const MAX: u8 = 100;

    pub fn new(name: impl Into<String>, level: i64) -> Result<Self, ContentError> {
        let name = required("skill", "name", Some(name.into()))?;
        let level = u8::try_from(level)
            .ok()
            .filter(|l| *l <= Self::MAX)
            .ok_or_else(|| ContentError::LevelOutOfRange {
                entry: name.clone(),
                level,
            })?;
        Ok(Self { name, level })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertiseTag(String);

impl ExpertiseTag {
    pub fn new(name: impl Into<String>) -> Result<Self, ContentError> {
        required("expertise", "name", Some(name.into())).map(Self)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    title: String,
    venue: String,
    description: String,
    link: Link,
}

impl Publication {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    title: String,
    issuer: String,
    link: Link,
}

impl Certification {
    pub fn new(
        title: impl Into<String>,
        issuer: impl Into<String>,
        link: &str,
    ) -> Result<Self, ContentError> {
        let title = required("certification", "title", Some(title.into()))?;
        let issuer = required(&title, "issuer", Some(issuer.into()))?;
        let link = Link::parse(&title, link)?;
        Ok(Self {
            title,
            issuer,
            link,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactIcon {
    Github,
    Linkedin,
    Email,
    Website,
}

impl ContactIcon {
    pub fn icon_class(self) -> &'static str {
        match self {
            ContactIcon::Github => "devicon-github-plain",
            ContactIcon::Linkedin => "devicon-linkedin-plain",
            ContactIcon::Email => "extra-email",
            ContactIcon::Website => "extra-link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    icon: ContactIcon,
    label: String,
    link: Link,
}

impl ContactLink {
    pub fn new(icon: ContactIcon, label: impl Into<String>, link: &str) -> Result<Self, ContentError> {
        let label = required("contact", "label", Some(label.into()))?;
        let link = Link::parse(&label, link)?;
        if icon == ContactIcon::Email && !link.is_mailto() {
            return Err(ContentError::UnsupportedScheme {
                entry: label,
                link: link.as_str().to_string(),
                scheme: link.0.scheme().to_string(),
            });
        }
        Ok(Self { icon, label, link })
    }

    pub fn icon(&self) -> ContactIcon {
        self.icon
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    profile: Profile,
    projects: Vec<Project>,
    skills: Vec<SkillLevel>,
    expertise: Vec<ExpertiseTag>,
    publication: Publication,
    certifications: Vec<Certification>,
    contacts: Vec<ContactLink>,
}

#[derive(Deserialize, Debug, Default)]
struct RawPortfolio {
    profile: Option<RawProfile>,
    #[serde(default)]
    projects: Vec<RawProject>,
    #[serde(default)]
    skills: Vec<RawSkill>,
    #[serde(default)]
    expertise: Vec<String>,
    publication: Option<RawPublication>,
    #[serde(default)]
    certifications: Vec<RawCertification>,
    #[serde(default)]
    contacts: Vec<RawContact>,
}

#[derive(Deserialize, Debug, Default)]
struct RawProfile {
    name: Option<String>,
    headline: Option<String>,
    tagline: Option<String>,
    copyright_holder: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct RawProject {
    title: Option<String>,
    description: Option<String>,
    #[serde(default)]
    tech: Vec<String>,
    link: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct RawSkill {
    name: Option<String>,
    level: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
struct RawPublication {
    title: Option<String>,
    venue: Option<String>,
    description: Option<String>,
    link: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct RawCertification {
    title: Option<String>,
    issuer: Option<String>,
    link: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawContact {
    icon: ContactIcon,
    label: Option<String>,
    link: Option<String>,
}

impl Portfolio {
    /// Loads the content file compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        let file = ContentAssets::get(CONTENT_FILE)
            .ok_or_else(|| ContentError::MissingAsset(CONTENT_FILE.to_string()))?;
        let json = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(json)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: RawPortfolio =
            serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))?;

        let profile = raw.profile.ok_or(ContentError::MissingField {
            entry: "portfolio".to_string(),
            field: "profile",
        })?;
        let name = required("profile", "name", profile.name)?;
        let profile = Profile {
            headline: required(&name, "headline", profile.headline)?,
            tagline: required(&name, "tagline", profile.tagline)?,
            copyright_holder: match profile.copyright_holder {
                Some(holder) => required(&name, "copyright_holder", Some(holder))?,
                None => name.clone(),
            },
            name,
        };

        let projects = raw
            .projects
            .into_iter()
            .map(|p| {
                let title = required("project", "title", p.title)?;
                let description = required(&title, "description", p.description)?;
                let link = required(&title, "link", p.link)?;
                Project::new(title, description, p.tech, &link)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let skills = raw
            .skills
            .into_iter()
            .map(|s| {
                let name = required("skill", "name", s.name)?;
                let level = s.level.ok_or_else(|| ContentError::MissingField {
                    entry: name.clone(),
                    field: "level",
                })?;
                SkillLevel::new(name, level)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expertise = raw
            .expertise
            .into_iter()
            .map(ExpertiseTag::new)
            .collect::<Result<Vec<_>, _>>()?;

        let publication = raw.publication.ok_or(ContentError::MissingField {
            entry: "portfolio".to_string(),
            field: "publication",
        })?;
        let title = required("publication", "title", publication.title)?;
        let publication = Publication {
            venue: required(&title, "venue", publication.venue)?,
            description: required(&title, "description", publication.description)?,
            link: Link::parse(&title, &required(&title, "link", publication.link)?)?,
            title,
        };

        let certifications = raw
            .certifications
            .into_iter()
            .map(|c| {
                let title = required("certification", "title", c.title)?;
                let issuer = required(&title, "issuer", c.issuer)?;
                let link = required(&title, "link", c.link)?;
                Certification::new(title, issuer, &link)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let contacts = raw
            .contacts
            .into_iter()
            .map(|c| {
                let label = required("contact", "label", c.label)?;
                let link = required(&label, "link", c.link)?;
                ContactLink::new(c.icon, label, &link)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            profile,
            projects,
            skills,
            expertise,
            publication,
            certifications,
            contacts,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &[SkillLevel] {
        &self.skills
    }

    pub fn expertise(&self) -> &[ExpertiseTag] {
        &self.expertise
    }

    pub fn publication(&self) -> &Publication {
        &self.publication
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    pub fn contacts(&self) -> &[ContactLink] {
        &self.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": { "name": "Test", "headline": "Dev", "tagline": "Builds things" },
        "projects": [
            { "title": "LOGIS", "description": "Orders", "tech": ["Java", "Spring Boot", "React"], "link": "https://github.com/example/logis" }
        ],
        "skills": [ { "name": "Python", "level": 90 } ],
        "expertise": ["Figma"],
        "publication": { "title": "Notes", "venue": "Blog", "description": "Writing", "link": "https://notes.sandeep.dev/" },
        "certifications": [ { "title": "Cert", "issuer": "Issuer", "link": "https://drive.google.com/cert" } ],
        "contacts": [ { "icon": "email", "label": "Email", "link": "mailto:me@sandeep.dev" } ]
    }"#;

    #[test]
    fn test_embedded_content_is_valid() {
        let portfolio = Portfolio::embedded().expect("embedded content should validate");
        assert_eq!(portfolio.projects().len(), 3);
        assert_eq!(portfolio.skills().len(), 3);
        assert_eq!(portfolio.expertise().len(), 6);
        assert_eq!(portfolio.certifications().len(), 3);
        assert!(!portfolio.contacts().is_empty());
        assert!(super::portfolio().is_ok());
    }

    #[test]
    fn test_minimal_document() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        let logis = &portfolio.projects()[0];
        assert_eq!(logis.title(), "LOGIS");
        assert_eq!(logis.tech(), ["Java", "Spring Boot", "React"]);
        // copyright holder falls back to the profile name
        assert_eq!(portfolio.profile().copyright_holder(), "Test");
        assert!(portfolio.contacts()[0].link().is_mailto());
    }

    #[test]
    fn test_skill_level_bounds() {
        assert_eq!(SkillLevel::new("Rust", 0).unwrap().level(), 0);
        assert_eq!(SkillLevel::new("Rust", 100).unwrap().level(), 100);
        assert!(matches!(
            SkillLevel::new("Rust", 101),
            Err(ContentError::LevelOutOfRange { level: 101, .. })
        ));
        assert!(matches!(
            SkillLevel::new("Rust", -1),
            Err(ContentError::LevelOutOfRange { level: -1, .. })
        ));
    }

    #[test]
    fn test_skill_bar_width() {
        let skill = SkillLevel::new("Django", 85).unwrap();
        assert_eq!(skill.bar_style(), "width: 85%");
    }

    #[test]
    fn test_link_validation() {
        assert!(Link::parse("x", "https://github.com/example").is_ok());
        assert!(Link::parse("x", "mailto:someone@sandeep.dev").is_ok());
        assert!(matches!(
            Link::parse("x", "not a url"),
            Err(ContentError::InvalidUrl { .. })
        ));
        assert!(matches!(
            Link::parse("x", "/relative/path"),
            Err(ContentError::InvalidUrl { .. })
        ));
        for raw in ["mailto:", "mailto:@", "mailto:a@", "mailto:@b"] {
            assert!(
                matches!(Link::parse("x", raw), Err(ContentError::InvalidUrl { .. })),
                "{raw} should be rejected"
            );
        }
        assert!(matches!(
            Link::parse("x", "ftp://files.sandeep.dev/file"),
            Err(ContentError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_placeholder_domains_rejected() {
        for raw in [
            "mailto:contact@example.com",
            "https://example.org/profile",
            "https://www.example.net",
            "mailto:me@Mail.Example.com",
        ] {
            assert!(
                matches!(
                    Link::parse("x", raw),
                    Err(ContentError::PlaceholderLink { .. })
                ),
                "{raw} should be rejected"
            );
        }
        assert!(Link::parse("x", "https://notexample.com").is_ok());

        let placeholder = MINIMAL.replace("me@sandeep.dev", "contact@example.com");
        assert!(matches!(
            Portfolio::from_json(&placeholder),
            Err(ContentError::PlaceholderLink { .. })
        ));
    }

    #[test]
    fn test_missing_fields_fail_fast() {
        let no_title = MINIMAL.replace(r#""title": "LOGIS", "#, "");
        assert!(matches!(
            Portfolio::from_json(&no_title),
            Err(ContentError::MissingField { field: "title", .. })
        ));

        let blank_issuer = MINIMAL.replace(r#""issuer": "Issuer""#, r#""issuer": "  ""#);
        assert!(matches!(
            Portfolio::from_json(&blank_issuer),
            Err(ContentError::MissingField { field: "issuer", .. })
        ));

        let no_level = MINIMAL.replace(r#", "level": 90"#, "");
        assert!(matches!(
            Portfolio::from_json(&no_level),
            Err(ContentError::MissingField { field: "level", .. })
        ));
    }

    #[test]
    fn test_project_requires_tech() {
        assert_eq!(
            Project::new("Empty", "Nothing", Vec::<String>::new(), "https://github.com"),
            Err(ContentError::EmptyTech {
                entry: "Empty".to_string()
            })
        );
        let bad = MINIMAL.replace(r#"["Java", "Spring Boot", "React"]"#, "[]");
        assert!(matches!(
            Portfolio::from_json(&bad),
            Err(ContentError::EmptyTech { .. })
        ));
    }

    #[test]
    fn test_email_contact_requires_mailto() {
        assert!(matches!(
            ContactLink::new(ContactIcon::Email, "Email", "https://sandeep.dev"),
            Err(ContentError::UnsupportedScheme { .. })
        ));
        let github =
            ContactLink::new(ContactIcon::Github, "GitHub", "https://github.com/example").unwrap();
        assert_eq!(github.icon().icon_class(), "devicon-github-plain");
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            Portfolio::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
        let err = Portfolio::from_json(&MINIMAL.replace("90", "150")).unwrap_err();
        assert_eq!(err.to_string(), "Python: skill level 150 is outside 0..=100");
    }
}
