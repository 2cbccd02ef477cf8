//! Detail view transitions.

use crate::backend::Commands;
use crate::message::DetailMessage;
use crate::model::{App, ViewState};

pub fn update(app: &mut App, commands: &dyn Commands, msg: DetailMessage) {
    match msg {
        DetailMessage::Back => {
            app.view = ViewState::List;
        }

        DetailMessage::OpenUrl => {
            if let Some(item) = app.filtered.get(app.cursor) {
                commands.open_url(&item.url);
            }
        }
    }
}
