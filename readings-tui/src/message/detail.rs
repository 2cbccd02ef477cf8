//! Detail view messages

/// Messages handled while the detail view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMessage {
    /// Return to the list view
    Back,
    /// Open the article url with the host's default handler
    OpenUrl,
}
