//! List view messages

/// Messages handled while the article list is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    /// Move the cursor up by the effective repeat count
    CursorUp,
    /// Move the cursor down by the effective repeat count
    CursorDown,
    /// `g`: first item, or 1-based line jump with a prefix
    JumpTop,
    /// `G`: last item, or 1-based line jump with a prefix
    JumpBottom,
    /// Toggle the item at cursor in the current week's reading list
    ToggleReading,
    /// Open the detail view for the item at cursor
    OpenDetail,
    /// Enter filter mode
    OpenFilter,
    /// Unrecognized key: clear the prefix buffer, nothing else
    ClearPrefix,
}
