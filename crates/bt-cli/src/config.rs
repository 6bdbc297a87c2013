//! `bt-drive` configuration, loaded from YAML.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use bt_core::BlackboardConfig;
use bt_tools::{ActivityStyle, RenderStyle};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    pub blackboard: BlackboardConfig,
    pub render: RenderStyle,
    pub activity: ActivityStyle,
    pub scenario: ScenarioConfig,
}

/// Mission parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_distance")]
    pub distance_to_goal: f64,

    #[serde(default)]
    pub seed: u64,

    /// Give up after this many ticks.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// Pause between ticks.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_distance() -> f64 {
    5.0
}
fn default_max_ticks() -> u64 {
    100
}
fn default_interval_ms() -> u64 {
    1000
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            distance_to_goal: default_distance(),
            seed: 0,
            max_ticks: default_max_ticks(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl DriveConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.render.indent > 0, "render.indent must be at least 1");
        ensure!(
            self.scenario.distance_to_goal.is_finite(),
            "scenario.distance_to_goal must be finite"
        );
        Ok(())
    }
}
