use std::sync::Arc;

use teloxide::{
    dispatching::dialogue::GetChatId,
    payloads::{EditMessageTextSetters, SendMessageSetters},
    prelude::Requester,
    types::{CallbackQuery, ChatId, MessageId},
    ApiError, Bot, RequestError,
};
use tracing::instrument;

use crate::{
    content::Catalog,
    keyboard::view_keyboard,
    machine::{self, Outbound, View},
    session::Session,
    HandlerResult, UserDialogue,
};

/// Every inline button of the bot lands here.
#[instrument(level = "info", skip_all, fields(user = %q.from.id.0, data = ?q.data))]
pub(crate) async fn press_button(
    bot: Bot,
    dialogue: UserDialogue,
    q: CallbackQuery,
    session: Session,
    catalog: Arc<Catalog>,
) -> HandlerResult {
    let Some(data) = q.data.as_deref() else {
        log::info!("User {} pressed a button without data", q.from.id.0);
        acknowledge(&bot, &q).await;
        return Ok(());
    };
    log::info!("User {} pressed button: {}", q.from.id.0, data);

    let transition = machine::advance(&session, data, &catalog);
    if let Some(reason) = &transition.rejected {
        log::warn!("User {} button '{}' not applied: {}", q.from.id.0, data, reason);
    }
    dialogue.update(transition.session).await?;
    acknowledge(&bot, &q).await;

    let Some(chat_id) = q.chat_id() else {
        log::warn!("User {} pressed a button outside of any chat", q.from.id.0);
        return Ok(());
    };
    let origin = q
        .message
        .as_ref()
        .and_then(|message| message.regular_message())
        .map(|message| message.id);

    for outbound in &transition.outbound {
        match outbound {
            Outbound::Show(view) => show(&bot, chat_id, origin, view).await?,
            Outbound::Notify(text) => {
                bot.send_message(chat_id, text.clone()).await?;
            }
        }
    }

    Ok(())
}

/// Stops the client-side spinner. A failed ack leaves the session as stored.
async fn acknowledge(bot: &Bot, q: &CallbackQuery) {
    if let Err(err) = bot.answer_callback_query(&q.id).await {
        log::warn!("User {} button press not acknowledged: {}", q.from.id.0, err);
    }
}

async fn show(
    bot: &Bot,
    chat_id: ChatId,
    origin: Option<MessageId>,
    view: &View,
) -> Result<(), RequestError> {
    let Some(message_id) = origin else {
        bot.send_message(chat_id, view.text.clone())
            .reply_markup(view_keyboard(view))
            .await?;
        return Ok(());
    };

    match bot
        .edit_message_text(chat_id, message_id, view.text.clone())
        .reply_markup(view_keyboard(view))
        .await
    {
        Ok(_) => Ok(()),
        // Re-rendering the view that is already on screen.
        Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(err) => Err(err),
    }
}
