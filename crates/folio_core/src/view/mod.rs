//! Read-only page projections over the content store.
//!
//! # Responsibility
//! - Give each routed page a typed view of exactly the document paths it
//!   renders.
//!
//! # Invariants
//! - Views never mutate the store and never perform network calls.
//! - Views are constructed from an explicit store reference, not an
//!   ambient global, and live no longer than the borrow.

use crate::model::{
    AboutSection, ContactSection, HeroSection, IntroSection, Project, Service, SiteContent,
    Socials, Step,
};
use crate::storage::ContentStorage;
use crate::store::ContentStore;

/// Home page projection: hero, highlight strip, intro, services, status line.
pub struct HomeView<'a> {
    content: &'a SiteContent,
}

impl<'a> HomeView<'a> {
    pub fn new<S: ContentStorage>(store: &'a ContentStore<S>) -> Self {
        Self {
            content: store.get(),
        }
    }

    pub fn hero(&self) -> &HeroSection {
        &self.content.home.hero
    }

    pub fn highlight_strip(&self) -> &[String] {
        &self.content.home.highlight_strip
    }

    pub fn intro(&self) -> &IntroSection {
        &self.content.home.intro
    }

    pub fn services(&self) -> &[Service] {
        &self.content.home.services
    }

    pub fn currently(&self) -> &str {
        &self.content.home.currently
    }
}

/// About page projection.
pub struct AboutView<'a> {
    content: &'a SiteContent,
}

impl<'a> AboutView<'a> {
    pub fn new<S: ContentStorage>(store: &'a ContentStore<S>) -> Self {
        Self {
            content: store.get(),
        }
    }

    pub fn section(&self) -> &AboutSection {
        &self.content.about
    }

    pub fn process(&self) -> &[Step] {
        &self.content.about.process
    }
}

/// Projects page projection over the ordered project list.
pub struct ProjectsView<'a> {
    content: &'a SiteContent,
}

impl<'a> ProjectsView<'a> {
    pub fn new<S: ContentStorage>(store: &'a ContentStore<S>) -> Self {
        Self {
            content: store.get(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.content.projects
    }

    /// Returns the first project carrying `id`. Ids are operator-authored
    /// and may collide; later duplicates are unreachable through this
    /// lookup.
    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.content.projects.iter().find(|project| project.id == id)
    }
}

/// Contact page projection, also read by the footer for social links.
pub struct ContactView<'a> {
    content: &'a SiteContent,
}

impl<'a> ContactView<'a> {
    pub fn new<S: ContentStorage>(store: &'a ContentStore<S>) -> Self {
        Self {
            content: store.get(),
        }
    }

    pub fn section(&self) -> &ContactSection {
        &self.content.contact
    }

    pub fn email(&self) -> &str {
        &self.content.contact.email
    }

    pub fn phone(&self) -> &str {
        &self.content.contact.phone
    }

    pub fn location(&self) -> &str {
        &self.content.contact.location
    }

    pub fn socials(&self) -> &Socials {
        &self.content.contact.socials
    }

    /// Relay identifier the contact form posts through; blank when the
    /// form is unconfigured.
    pub fn relay_id(&self) -> &str {
        &self.content.contact.formspree_id
    }
}
