pub mod api;
pub mod cli;
pub mod colors;
pub mod config;
pub mod domain;
pub mod errors;
pub mod repository;
pub mod services;
pub mod simulator;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::rankings::RankingsService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_rankings(league_id: i64, season_id: i32) -> Result<()> {
    let config = AppConfig::new();
    let service = RankingsService::new(config);
    service.run(league_id, season_id)
}
