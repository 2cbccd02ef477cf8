//! UI rendering (read-only over the model).

mod components;
mod layout;
mod pages;
mod theme;

pub use layout::render;
