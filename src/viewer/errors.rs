//! Error types for the title display binder.

use thiserror::Error;

/// Failures while wiring anchors or displaying a title.
#[derive(Debug, Clone, Error)]
pub enum ViewerError {
    /// No global window/document to operate on.
    #[error("document is not available in this context")]
    NoDocument,

    /// The output field with the expected id does not exist.
    #[error("no element with id '{0}' in the document")]
    InfoboxMissing(String),

    /// The output field exists but is not a textarea.
    #[error("element '{0}' is not a textarea")]
    InfoboxNotTextArea(String),

    /// The clicked anchor carries no title attribute.
    #[error("anchor element has no 'xlink:title' attribute")]
    TitleMissing,

    /// The DOM rejected an event-listener registration.
    #[error("event listener registration failed: {0}")]
    Listener(String),
}
