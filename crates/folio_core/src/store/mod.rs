//! Content store: the single source of truth for the site document.
//!
//! # Responsibility
//! - Hold the one in-memory `SiteContent` every consumer reads.
//! - Initialize from durable storage with silent fallback to the default.
//! - Persist on every full-document replace.
//!
//! # Invariants
//! - Exactly one document is in scope; `replace` swaps it wholesale,
//!   never merges fields.
//! - Startup parse failures are operator-log diagnostics, never surfaced
//!   to end users.
//! - Durable writes are fire-and-forget: memory changes first and a
//!   failed write does not roll it back.

use crate::model::{default_content, SiteContent};
use crate::storage::ContentStorage;
use log::{info, warn};

/// Fixed key the serialized document is persisted under.
pub const CONTENT_KEY: &str = "portfolio-content";

/// Single mutable holder of the current site document.
pub struct ContentStore<S: ContentStorage> {
    storage: S,
    content: SiteContent,
}

impl<S: ContentStorage> ContentStore<S> {
    /// Loads the persisted document, falling back to the compiled-in
    /// default when storage is empty, unreadable, or unparseable.
    pub fn init(storage: S) -> Self {
        let content = match storage.load(CONTENT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<SiteContent>(&raw) {
                Ok(document) => {
                    info!("event=store_init module=store status=ok source=persisted");
                    document
                }
                Err(err) => {
                    warn!(
                        "event=store_init module=store status=fallback reason=parse_failed error={err}"
                    );
                    default_content()
                }
            },
            Ok(None) => {
                info!("event=store_init module=store status=ok source=default");
                default_content()
            }
            Err(err) => {
                warn!(
                    "event=store_init module=store status=fallback reason=load_failed error={err}"
                );
                default_content()
            }
        };

        Self { storage, content }
    }

    /// Returns the current document. Never fails.
    pub fn get(&self) -> &SiteContent {
        &self.content
    }

    /// Replaces the whole document and persists it under [`CONTENT_KEY`].
    ///
    /// The in-memory document is updated even when the durable write
    /// fails; the failure is logged and the next session falls back to
    /// the default.
    pub fn replace(&mut self, document: SiteContent) {
        self.content = document;

        let serialized = match serde_json::to_string(&self.content) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(
                    "event=store_replace module=store status=persist_skipped error={err}"
                );
                return;
            }
        };
        match self.storage.save(CONTENT_KEY, &serialized) {
            Ok(()) => info!("event=store_replace module=store status=ok"),
            Err(err) => {
                warn!(
                    "event=store_replace module=store status=persist_failed error={err}"
                );
            }
        }
    }
}
