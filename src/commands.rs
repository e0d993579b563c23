use std::sync::Arc;

use teloxide::{
    payloads::SendMessageSetters, prelude::Requester, types::Message, utils::command::BotCommands,
    Bot,
};
use tracing::instrument;

use crate::{content::Catalog, keyboard::view_keyboard, machine, HandlerResult, UserDialogue};

#[derive(Debug, Clone, BotCommands)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "display help.")]
    Help,
    #[command(description = "start over from the topic menu.")]
    Start,
}

pub(crate) async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

#[instrument(level = "info", skip(bot, dialogue, catalog), fields(chat = msg.chat.id.0))]
pub(crate) async fn start(
    bot: Bot,
    msg: Message,
    dialogue: UserDialogue,
    catalog: Arc<Catalog>,
) -> HandlerResult {
    log::info!("Chat {} started the bot", msg.chat.id.0);

    let transition = machine::start(&catalog);
    let view = transition.view().cloned();
    dialogue.update(transition.session).await?;

    if let Some(view) = view {
        bot.send_message(msg.chat.id, view.text.clone())
            .reply_markup(view_keyboard(&view))
            .await?;
    }
    Ok(())
}
