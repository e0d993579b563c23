use std::error::Error;
use std::sync::Arc;

use aptoslearnbot::config::Config;
use aptoslearnbot::content::Catalog;
use aptoslearnbot::schema::schema;
use aptoslearnbot::session::Session;
use dotenvy::dotenv;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks::{self, Options};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenv().ok();
    let config = Config::from_env()?;
    init_tracing(&config.log_level)?;

    let catalog = match &config.content_path {
        Some(path) => {
            log::info!("Loading course from {}", path.display());
            Catalog::load(path)?
        }
        None => Catalog::builtin()?,
    };
    log::info!("Course has {} topics", catalog.topics().len());

    let bot = Bot::new(config.token.clone());
    log::info!("Starting bot...");

    let mut dispatcher = Dispatcher::builder(bot.clone(), schema())
        .dependencies(dptree::deps![
            InMemStorage::<Session>::new(),
            Arc::new(catalog)
        ])
        .enable_ctrlc_handler()
        .build();

    if let Some(webhook) = config.webhook {
        log::info!("Listening for updates on {} ({})", webhook.addr, webhook.url);
        let listener = webhooks::axum(bot, Options::new(webhook.addr, webhook.url)).await?;
        dispatcher
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await
    } else {
        log::info!("Polling for updates");
        dispatcher.dispatch().await
    }

    log::info!("Bot stopped");
    Ok(())
}

fn init_tracing(level: &str) -> Result<(), BoxError> {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(level)?)
        .with_span_events(FmtSpan::ENTER)
        .with_line_number(true)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;
    Ok(())
}
