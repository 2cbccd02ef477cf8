//! Event layer: raw terminal input to messages
//!
//! Polls crossterm and translates key events into [`AppMessage`]s based on
//! the active view. Translation never mutates state; dispatch and state
//! changes happen in the update layer.
//!
//! [`AppMessage`]: crate::message::AppMessage

mod handler;

pub use handler::{handle_event, poll_event};
