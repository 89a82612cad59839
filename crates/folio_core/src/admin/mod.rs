//! Admin editor: operator-facing whole-document edit surface.
//!
//! # Responsibility
//! - Toggle visibility from a fixed keyboard chord or explicit close.
//! - Serialize the store's document into an editable text buffer and
//!   replace the document from that buffer on save.
//! - Reset buffer and store to the compiled-in default on confirmation.
//!
//! # Invariants
//! - Initial state is hidden with an empty buffer.
//! - A save that fails to parse never touches the store and never
//!   discards the operator's unsaved text.
//! - Reset without explicit confirmation is a no-op.
//!
//! This is a local single-operator convenience. It carries no
//! authentication and must not be treated as a trust boundary.

use crate::model::{default_content, SiteContent};
use crate::storage::ContentStorage;
use crate::store::ContentStore;
use log::{info, warn};

/// A single keyboard event as delivered by the host UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub ctrl: bool,
    pub shift: bool,
    pub key: char,
}

/// Returns whether `event` is the editor toggle chord (Ctrl+Shift+A).
pub fn is_toggle_chord(event: KeyEvent) -> bool {
    event.ctrl && event.shift && event.key.eq_ignore_ascii_case(&'a')
}

/// Outcome of the most recent editor action, for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorStatus {
    /// Nothing to report.
    Idle,
    /// The buffer was parsed and the store replaced.
    Saved,
    /// The buffer is not valid JSON; the store was left unchanged.
    InvalidFormat(String),
}

/// Toggleable editor over the content store's document.
pub struct AdminEditor {
    visible: bool,
    buffer: String,
    status: EditorStatus,
}

impl Default for AdminEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminEditor {
    /// Creates a hidden editor with an empty buffer.
    pub fn new() -> Self {
        Self {
            visible: false,
            buffer: String::new(),
            status: EditorStatus::Idle,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn status(&self) -> &EditorStatus {
        &self.status
    }

    /// Replaces the edit buffer with operator-typed text.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Feeds one keyboard event; the toggle chord flips visibility.
    ///
    /// Returns whether the event was consumed.
    pub fn handle_key<S: ContentStorage>(
        &mut self,
        event: KeyEvent,
        store: &ContentStore<S>,
    ) -> bool {
        if !is_toggle_chord(event) {
            return false;
        }
        self.toggle(store);
        true
    }

    /// Flips visibility. Opening loads a fresh draft of the current
    /// document; closing keeps the buffer for the next open's overwrite.
    pub fn toggle<S: ContentStorage>(&mut self, store: &ContentStore<S>) {
        if self.visible {
            self.close();
        } else {
            self.open(store);
        }
    }

    /// Shows the editor with the store's document as a pretty-printed draft.
    pub fn open<S: ContentStorage>(&mut self, store: &ContentStore<S>) {
        self.visible = true;
        self.status = EditorStatus::Idle;
        self.buffer = render_draft(store.get());
        info!("event=editor_open module=admin status=ok");
    }

    /// Hides the editor without saving.
    pub fn close(&mut self) {
        self.visible = false;
        self.status = EditorStatus::Idle;
    }

    /// Parses the buffer and replaces the store's document on success.
    ///
    /// On parse failure the store is untouched and the buffer is kept so
    /// no operator work is lost; the error is reported inline through
    /// [`EditorStatus::InvalidFormat`].
    pub fn save<S: ContentStorage>(&mut self, store: &mut ContentStore<S>) -> &EditorStatus {
        match serde_json::from_str::<SiteContent>(&self.buffer) {
            Ok(document) => {
                store.replace(document);
                self.status = EditorStatus::Saved;
                info!("event=editor_save module=admin status=ok");
            }
            Err(err) => {
                warn!("event=editor_save module=admin status=invalid_format error={err}");
                self.status = EditorStatus::InvalidFormat(
                    "Invalid JSON format. Please check your syntax.".to_string(),
                );
            }
        }
        &self.status
    }

    /// Restores the compiled-in default document in both the buffer and
    /// the store. Requires `confirmed` from an explicit operator prompt.
    pub fn reset<S: ContentStorage>(&mut self, store: &mut ContentStore<S>, confirmed: bool) {
        if !confirmed {
            return;
        }
        let document = default_content();
        self.buffer = render_draft(&document);
        store.replace(document);
        self.status = EditorStatus::Idle;
        info!("event=editor_reset module=admin status=ok");
    }
}

/// Pretty-prints a document for the edit buffer. Field order follows the
/// schema declaration, so drafts are stable between opens.
fn render_draft(document: &SiteContent) -> String {
    // A schema value always serializes; an empty draft would otherwise be
    // saved back as an invalid-format error, which is the safe failure.
    serde_json::to_string_pretty(document).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{is_toggle_chord, KeyEvent};

    #[test]
    fn toggle_chord_requires_both_modifiers() {
        assert!(is_toggle_chord(KeyEvent {
            ctrl: true,
            shift: true,
            key: 'a'
        }));
        assert!(is_toggle_chord(KeyEvent {
            ctrl: true,
            shift: true,
            key: 'A'
        }));
        assert!(!is_toggle_chord(KeyEvent {
            ctrl: true,
            shift: false,
            key: 'a'
        }));
        assert!(!is_toggle_chord(KeyEvent {
            ctrl: false,
            shift: true,
            key: 'a'
        }));
        assert!(!is_toggle_chord(KeyEvent {
            ctrl: true,
            shift: true,
            key: 'b'
        }));
    }
}
