use session::Session;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::Dialogue};

pub mod commands;
pub mod config;
pub mod content;
pub mod intent;
pub mod keyboard;
pub mod machine;
pub mod runner;
pub mod schema;
pub mod session;

type UserDialogue = Dialogue<Session, InMemStorage<Session>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;
