//! Site content document types.
//!
//! # Responsibility
//! - Mirror the published content shape field-for-field.
//! - Keep serialized names stable (`camelCase`) across persistence, the
//!   admin edit buffer, and page view reads.
//!
//! # Invariants
//! - Every field is `#[serde(default)]`-tolerant: a document that omits a
//!   field parses and renders the field empty.
//! - `Project.id` is operator-authored; the system never generates ids and
//!   never checks them for uniqueness.

use serde::{Deserialize, Serialize};

/// The whole editable site document. Exactly one instance is in scope at
/// any time; it is replaced wholesale, never patched field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub home: HomeSection,
    pub about: AboutSection,
    pub projects: Vec<Project>,
    pub contact: ContactSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeSection {
    pub hero: HeroSection,
    pub highlight_strip: Vec<String>,
    pub intro: IntroSection,
    pub services: Vec<Service>,
    pub currently: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSection {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroSection {
    pub title: String,
    pub description: String,
}

/// One offered service card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutSection {
    pub header: String,
    pub subheader: String,
    pub bio: String,
    pub quick_facts: QuickFacts,
    pub skills: Skills,
    pub process: Vec<Step>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickFacts {
    pub location: String,
    pub role: String,
    pub tools: String,
    pub interests: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub ui: String,
    pub ux: String,
    pub frontend: String,
    pub prototyping: String,
}

/// One step in the about-page process timeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub title: String,
    pub description: String,
}

/// One portfolio entry. Case-study fields are optional and omitted from
/// serialization when unset, matching the published shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    /// Operator-chosen identifier. Uniqueness is NOT enforced.
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSection {
    pub header: String,
    pub subheader: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Relay form identifier. Blank means the contact form is unconfigured
    /// and submissions are refused before any network attempt.
    pub formspree_id: String,
    pub socials: Socials,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    pub behance: String,
    pub linkedin: String,
    pub github: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_names_follow_published_shape() {
        let mut content = SiteContent::default();
        content.home.hero.cta_primary = "View work".to_string();
        content.home.highlight_strip.push("Figma".to_string());
        content.contact.formspree_id = "abc123".to_string();
        content.projects.push(Project {
            id: "p1".to_string(),
            case_study_url: Some("https://example.com".to_string()),
            ..Project::default()
        });

        let json = serde_json::to_value(&content).expect("document should serialize");
        assert_eq!(json["home"]["hero"]["ctaPrimary"], "View work");
        assert_eq!(json["home"]["highlightStrip"][0], "Figma");
        assert_eq!(json["about"]["quickFacts"]["location"], "");
        assert_eq!(json["contact"]["formspreeId"], "abc123");
        assert_eq!(json["projects"][0]["caseStudyUrl"], "https://example.com");
    }

    #[test]
    fn unset_project_options_are_omitted() {
        let project = Project {
            id: "bare".to_string(),
            ..Project::default()
        };
        let json = serde_json::to_value(&project).expect("project should serialize");
        let object = json.as_object().expect("project serializes to an object");
        assert!(!object.contains_key("caseStudyUrl"));
        assert!(!object.contains_key("process"));
    }

    #[test]
    fn missing_fields_deserialize_to_empty_defaults() {
        let parsed: SiteContent =
            serde_json::from_str(r#"{"home":{"currently":"exploring"}}"#)
                .expect("partial document should parse");
        assert_eq!(parsed.home.currently, "exploring");
        assert!(parsed.home.hero.name.is_empty());
        assert!(parsed.projects.is_empty());
        assert!(parsed.contact.formspree_id.is_empty());
    }
}
