//! Hand-authored site content, embedded at build time.

use crate::error::Error;
use serde::Deserialize;
use url::Url;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub brand: String,
    pub first_name: String,
    pub full_name: String,
    pub greeting: String,
    pub about: String,
    pub portrait: String,
    pub logo: String,
    pub resume: String,
    pub email: String,
    pub source_profile: String,
}

/// Availability shown in the hero badge.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    Available,
    Internship { company: String },
    Working { company: String },
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Self::Available => "Available for work".to_string(),
            Self::Internship { company } => format!("Currently Internship at {company}"),
            Self::Working { company } => format!("Currently work at {company}"),
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            Self::Available => "status-dot status-available",
            Self::Internship { .. } => "status-dot status-internship",
            Self::Working { .. } => "status-dot status-working",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Tech {
    pub name: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TechCategory {
    pub title: String,
    pub techs: Vec<Tech>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub name: String,
    pub date: String,
    pub image: String,
    pub description: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactChannel {
    pub title: String,
    pub detail: String,
    pub url: String,
}

impl ContactChannel {
    pub fn opens_in_place(&self) -> bool {
        self.url.starts_with("mailto:")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub description: String,
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub status: Status,
    pub typing_words: Vec<String>,
    pub skill_badges: Vec<String>,
    pub tech_categories: Vec<TechCategory>,
    pub projects: Vec<Project>,
    pub contact_channels: Vec<ContactChannel>,
    pub social_links: Vec<SocialLink>,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, Error> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.typing_words.is_empty() {
            return Err(Error::EmptyWordList);
        }

        let outbound = std::iter::once(("profile", self.profile.source_profile.as_str()))
            .chain(self.projects.iter().map(|p| (p.name.as_str(), p.link.as_str())))
            .chain(self.contact_channels.iter().map(|c| (c.title.as_str(), c.url.as_str())))
            .chain(self.social_links.iter().map(|s| (s.name.as_str(), s.url.as_str())));

        for (owner, raw) in outbound {
            if !is_outbound_link(raw) {
                return Err(Error::InvalidLink {
                    owner: owner.to_string(),
                    url: raw.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn is_outbound_link(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https" | "mailto"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::embedded().expect("embedded content is valid");

        assert!(!content.typing_words.is_empty());
        assert_eq!(content.status, Status::Available);
        assert_eq!(content.projects.len(), 3);
        assert!(content.tech_categories.iter().all(|category| !category.techs.is_empty()));
    }

    #[test]
    fn status_text_names_company() {
        let status = Status::Working {
            company: "Acme".to_string(),
        };
        assert_eq!(status.text(), "Currently work at Acme");
        assert_eq!(Status::Available.text(), "Available for work");
    }

    #[test]
    fn status_deserializes_tagged_kind() {
        let status: Status =
            serde_json::from_str(r#"{ "kind": "internship", "company": "Acme" }"#).expect("valid");
        assert_eq!(
            status,
            Status::Internship {
                company: "Acme".to_string()
            }
        );
    }

    #[test]
    fn outbound_links_must_be_web_or_mail() {
        assert!(is_outbound_link("https://github.com/Flynnxlch"));
        assert!(is_outbound_link("mailto:someone@example.com"));
        assert!(!is_outbound_link("javascript:alert(1)"));
        assert!(!is_outbound_link("/cv.pdf"));
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let raw = SITE_JSON.replacen(
            r#""typing_words": ["#,
            r#""typing_words": [], "unused": ["#,
            1,
        );
        let result = SiteContent::from_json(&raw);
        assert!(matches!(result, Err(Error::EmptyWordList)));
    }

    #[test]
    fn bad_project_link_is_reported_with_owner() {
        let raw = SITE_JSON.replacen(
            "https://github.com/Flynnxlch/Bisaditas",
            "ftp://example.com/Bisaditas",
            1,
        );
        match SiteContent::from_json(&raw) {
            Err(Error::InvalidLink { owner, .. }) => assert_eq!(owner, "BisaDitas"),
            other => panic!("expected invalid link, got {other:?}"),
        }
    }

    #[test]
    fn source_profile_is_validated_as_outbound() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        assert_eq!(content.profile.source_profile, "https://github.com/Flynnxlch");

        let raw = SITE_JSON.replacen(
            r#""source_profile": "https://github.com/Flynnxlch""#,
            r#""source_profile": "/github""#,
            1,
        );
        match SiteContent::from_json(&raw) {
            Err(Error::InvalidLink { owner, url }) => {
                assert_eq!(owner, "profile");
                assert_eq!(url, "/github");
            }
            other => panic!("expected invalid link, got {other:?}"),
        }
    }

    #[test]
    fn resume_is_shipped_with_the_build() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        let file = content.profile.resume.trim_start_matches('/');
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));

        assert!(root.join("public").join(file).is_file());

        let index = std::fs::read_to_string(root.join("index.html")).expect("index.html");
        let copy_entry = format!(r#"rel="copy-file" href="public/{file}""#);
        assert!(index.contains(&copy_entry));
    }

    #[test]
    fn mail_channel_opens_in_place() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        let email = content
            .contact_channels
            .iter()
            .find(|channel| channel.title == "Email")
            .expect("email channel");
        assert!(email.opens_in_place());
    }
}
