//! Application main message enum

use super::{DetailMessage, FilterMessage, ListMessage};

/// Application main message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Terminal window was resized
    Resize(u16, u16),

    /// A digit was pressed; append to the numeric-repeat prefix buffer
    Digit(char),

    /// List view messages
    List(ListMessage),

    /// Detail view messages
    Detail(DetailMessage),

    /// Filter view messages
    Filter(FilterMessage),

    /// Show a transient status message (also carries async command results)
    Status(String),

    /// Clear the status message (sent by the scheduled expiry)
    ClearStatus,

    /// No-op (ignored events)
    Noop,
}
