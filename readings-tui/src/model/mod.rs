//! Model layer: all interactive view state

mod app;
mod view_state;

pub use app::App;
pub use view_state::ViewState;
