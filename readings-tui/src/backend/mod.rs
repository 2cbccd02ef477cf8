//! Backend layer: async command dispatch
//!
//! The update layer never blocks: every remote/storage call is handed to
//! the dispatcher, runs on the tokio runtime, and delivers its outcome
//! back into the event loop as an ordinary message.

mod dispatcher;
mod external;

pub use dispatcher::{Commands, Dispatcher};
pub use external::{open_url, trigger_background_sync};
