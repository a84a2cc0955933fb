mod api;
mod app;
mod config;
mod models;
mod state;
mod ui;

use std::sync::Arc;

use clap::Parser;
use dioxus::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::orchestrator::Orchestrator;

fn main() {
    let log_dir = {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("newsdesk");
        std::fs::create_dir_all(&dir).ok();
        dir
    };
    let file_appender = tracing_appender::rolling::never(log_dir, "newsdesk.log");
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(file_appender))
        .init();

    let cli = config::Cli::parse();
    let client = config::Config::load(&cli)
        .map_err(|e| e.to_string())
        .and_then(|cfg| api::ApiClient::new(&cfg).map_err(|e| e.to_string()));

    match client {
        Ok(client) => {
            let orchestrator = Orchestrator::new(Arc::new(client));
            LaunchBuilder::new()
                .with_context(orchestrator)
                .launch(app::App);
        }
        Err(err) => {
            tracing::error!("startup failed: {err}");
            LaunchBuilder::new()
                .with_context(app::StartupError(err))
                .launch(app::StartupErrorApp);
        }
    }
}
