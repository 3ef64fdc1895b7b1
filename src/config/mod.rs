use crate::config::cli::Args;
use crate::domain::{Group, Hotel};
use crate::error::{Result, ScoreError};
use clap::Parser;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

pub mod cli;

/// The portfolio file: the managed hotels, their platform listings,
/// the named groups over them and the rating provider endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    pub provider_url: String,
    pub hotels: Vec<Hotel>,
    pub groups: Vec<Group>,
}

impl PortfolioConfig {
    pub fn hotel(&self, id: &str) -> Result<&Hotel> {
        self.hotels
            .iter()
            .find(|h| h.id == id)
            .ok_or_else(|| ScoreError::UnknownHotel(id.to_string()))
    }

    pub fn group(&self, id: &str) -> Result<&Group> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| ScoreError::UnknownGroup(id.to_string()))
    }

    /// Resolves a group to its member hotels, in portfolio order.
    pub fn group_members(&self, id: &str) -> Result<Vec<&Hotel>> {
        let group = self.group(id)?;
        group.hotel_ids.iter().map(|id| self.hotel(id)).collect()
    }
}

pub struct Config {
    pub args: Args,
    pub portfolio: PortfolioConfig,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        let portfolio: PortfolioConfig =
            serde_json::from_str(&std::fs::read_to_string(&args.portfolio_file)?)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("stayscore/0.1")
            .build()?;

        Ok(Self {
            args,
            portfolio,
            http_client,
        })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }

        info!("Data dir exists");
        Ok(())
    }
}
