mod bot;
mod config;
mod data;
mod error;
mod logging;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    logging::init_tracing(config.log_level);

    let db = startup::connect_to_database(&config).await?;
    let state = BotState::new(db);

    bot::start::start_bot(&config, state).await
}
