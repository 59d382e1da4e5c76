//! Handles the controller drives: the visible surface and the developer log.

use crate::client::ClientError;

/// Identifier handed out for each summarize trigger
pub type RequestId = u64;

/// Whether the modal is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// User-facing surface: a blocking alert and one modal with a text node.
pub trait Surface {
    /// Raise a blocking alert with the given message
    fn alert(&mut self, message: &str);

    /// Replace the modal's text. The text is shown literally.
    fn set_modal_text(&mut self, text: &str);

    fn set_modal_visibility(&mut self, visibility: Visibility);

    fn modal_visibility(&self) -> Visibility;
}

/// Developer-facing channel for failures the user is not told about.
pub trait Diagnostics {
    fn request_failed(&mut self, id: RequestId, error: &ClientError);
}

/// Writes diagnostics as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn request_failed(&mut self, id: RequestId, error: &ClientError) {
        tracing::error!(request = id, error = %error, "summarize request failed");
    }
}
