//! Message layer: everything the update layer can react to
//!
//! Events from the terminal are translated into these messages by the
//! event layer; async command results arrive over the same enum through
//! the dispatcher channel, so all state changes are linearized through
//! one `update` call per message.

mod app;
mod detail;
mod filter;
mod list;

pub use app::AppMessage;
pub use detail::DetailMessage;
pub use filter::FilterMessage;
pub use list::ListMessage;
