//! Core domain logic for the Folio portfolio site.
//! This crate is the single source of truth for the site document and
//! every operation that reads or replaces it.

pub mod admin;
pub mod contact;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use admin::{is_toggle_chord, AdminEditor, EditorStatus, KeyEvent};
pub use contact::{
    ContactForm, HttpRelayTransport, InquiryFields, RelayError, RelayTransport, SubmitError,
    SubmitStatus, RELAY_BASE_URL,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{default_content, Project, SiteContent};
pub use storage::{ContentStorage, FileStorage, SqliteStorage, StorageError, StorageResult};
pub use store::{ContentStore, CONTENT_KEY};
pub use view::{AboutView, ContactView, HomeView, ProjectsView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
