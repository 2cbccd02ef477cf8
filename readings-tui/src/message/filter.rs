//! Filter view messages

/// Messages handled while the tag filter is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMessage {
    /// Move the cursor up one tag
    CursorUp,
    /// Move the cursor down one tag
    CursorDown,
    /// Toggle the tag at cursor in the working selection
    ToggleTag,
    /// Select every tag
    SelectAll,
    /// Apply the selection and return to the list
    Commit,
    /// Discard this session's toggles and return to the list
    Cancel,
}
