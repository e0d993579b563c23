use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::machine::{Action, View};

pub(crate) fn view_keyboard(view: &View) -> InlineKeyboardMarkup {
    let keyboard: Vec<Vec<InlineKeyboardButton>> = view
        .rows
        .iter()
        .map(|row| row.iter().map(action_button).collect())
        .collect();

    InlineKeyboardMarkup::new(keyboard)
}

fn action_button(action: &Action) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(action.label.clone(), action.token.clone())
}
