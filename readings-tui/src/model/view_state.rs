//! Active view enum

/// The view currently driving input handling and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Scrollable article list
    #[default]
    List,
    /// Single article detail
    Detail,
    /// Tag selection overlay
    Filter,
}
