//! Canonical site content model.
//!
//! # Responsibility
//! - Define the single document shape every page view reads from.
//! - Provide the compiled-in default document used as startup fallback.
//!
//! # Invariants
//! - Serialized field names are the external read contract; page views and
//!   any previously persisted document address fields by these exact names.
//! - Missing fields deserialize to empty defaults instead of failing, so a
//!   loosely edited document still loads (gaps surface as empty render
//!   values, never as parse errors).

pub mod content;
mod default;

pub use content::{
    AboutSection, ContactSection, HeroSection, HomeSection, IntroSection, Project, QuickFacts,
    Service, SiteContent, Skills, Socials, Step,
};
pub use default::default_content;
