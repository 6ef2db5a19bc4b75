use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::agent::ArgumentMode;
use crate::error::NegotiationError;
use crate::preferences::Item;

/// Who opens the negotiation, and with which item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opening {
    /// Index into the agent list of the proposer
    pub proposer: usize,
    /// Index into the agent list of the responder
    pub responder: usize,
    /// Index into the item catalogue
    pub item: usize,
}

impl Default for Opening {
    fn default() -> Self {
        Self { proposer: 0, responder: 1, item: 1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NegotiationConfig {
    /// Seeds preference generation and activation order
    pub seed: u64,
    /// Round budget for a run
    pub steps: usize,
    pub agents: usize,
    pub mode: ArgumentMode,
    pub items: Vec<Item>,
    pub opening: Opening,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            steps: 15,
            agents: 2,
            mode: ArgumentMode::Classic,
            items: vec![
                Item::new("Diesel Engine", "A super cool diesel engine"),
                Item::new("Electric Engine", "A very quiet engine"),
                Item::new("Hydrogen Engine", "An engine that produces water"),
            ],
            opening: Opening::default(),
        }
    }
}

impl NegotiationConfig {
    pub fn validate(&self) -> Result<(), NegotiationError> {
        if self.agents < 2 {
            return Err(NegotiationError::Config(format!(
                "a negotiation needs at least 2 agents, got {}",
                self.agents
            )));
        }
        if self.items.is_empty() {
            return Err(NegotiationError::Config("item catalogue is empty".to_string()));
        }
        let Opening { proposer, responder, item } = self.opening;
        if proposer >= self.agents || responder >= self.agents || proposer == responder {
            return Err(NegotiationError::Config(format!(
                "opening agents {} and {} must be distinct indices below {}",
                proposer, responder, self.agents
            )));
        }
        if item >= self.items.len() {
            return Err(NegotiationError::Config(format!(
                "opening item {} is outside a catalogue of {}",
                item,
                self.items.len()
            )));
        }
        Ok(())
    }

    /// Apply `NEGOTIATION_MODE`, `NEGOTIATION_SEED` and `NEGOTIATION_STEPS` when set.
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(mode) = std::env::var("NEGOTIATION_MODE") {
            self.mode = mode.parse()?;
        }
        if let Ok(seed) = std::env::var("NEGOTIATION_SEED") {
            self.seed = seed.parse().context("NEGOTIATION_SEED is not a number")?;
        }
        if let Ok(steps) = std::env::var("NEGOTIATION_STEPS") {
            self.steps = steps.parse().context("NEGOTIATION_STEPS is not a number")?;
        }
        Ok(self)
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the config, writing the default first if the file is missing.
    pub async fn load(&self) -> Result<NegotiationConfig> {
        if !self.path.exists() {
            let default = NegotiationConfig::default();
            self.save(&default).await?;
            return Ok(default);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        let config: NegotiationConfig =
            serde_json::from_str(&content).context("Failed to parse negotiation config")?;
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, config: &NegotiationConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}
