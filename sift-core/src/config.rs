//! Solve configuration

use crate::error::{Result, SolveError};
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Number of largest group sums kept by the calorie tracker
    pub const TOP_K: usize = 3;

    /// Length of the distinct-character window (start-of-message marker)
    pub const WINDOW: usize = 14;

    /// Whether spelled-out digit words count as calibration digits
    pub const SPELLED_DIGITS: bool = true;
}

/// Meaning of the second column of the strategy guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyColumn {
    /// The second symbol is the gesture we play
    #[default]
    Gesture,
    /// The second symbol is the outcome we must reach
    Outcome,
}

/// How the crane moves a batch of crates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CraneModel {
    /// All crates are lifted at once and keep their relative order
    #[default]
    Bulk,
    /// Crates are moved one by one, so the batch ends up reversed
    OneAtATime,
}

/// Knobs for the individual accumulators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub(crate) top_k: usize,
    pub(crate) window: usize,
    pub(crate) strategy: StrategyColumn,
    pub(crate) crane: CraneModel,
    pub(crate) spelled_digits: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::TOP_K,
            window: defaults::WINDOW,
            strategy: StrategyColumn::default(),
            crane: CraneModel::default(),
            spelled_digits: defaults::SPELLED_DIGITS,
        }
    }
}

impl SolveConfig {
    /// Create a configuration builder
    pub fn builder() -> SolveConfigBuilder {
        SolveConfigBuilder::default()
    }

    /// Number of group sums kept by the calorie tracker
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Distinct-character window length
    pub fn window(&self) -> usize {
        self.window
    }

    /// Strategy guide interpretation
    pub fn strategy(&self) -> StrategyColumn {
        self.strategy
    }

    /// Crane model for the stack simulator
    pub fn crane(&self) -> CraneModel {
        self.crane
    }

    /// Whether digit words count as calibration digits
    pub fn spelled_digits(&self) -> bool {
        self.spelled_digits
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(SolveError::Configuration(
                "top_k must be greater than 0".into(),
            ));
        }

        if self.window == 0 {
            return Err(SolveError::Configuration(
                "window must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`SolveConfig`]
#[derive(Debug, Default)]
pub struct SolveConfigBuilder {
    top_k: Option<usize>,
    window: Option<usize>,
    strategy: Option<StrategyColumn>,
    crane: Option<CraneModel>,
    spelled_digits: Option<bool>,
}

impl SolveConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many group sums to keep
    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    /// Set the distinct-character window length
    pub fn window(mut self, length: usize) -> Self {
        self.window = Some(length);
        self
    }

    /// Set the strategy guide interpretation
    pub fn strategy(mut self, strategy: StrategyColumn) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Set the crane model
    pub fn crane(mut self, crane: CraneModel) -> Self {
        self.crane = Some(crane);
        self
    }

    /// Enable or disable spelled-out digit words
    pub fn spelled_digits(mut self, enabled: bool) -> Self {
        self.spelled_digits = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SolveConfig> {
        let mut config = SolveConfig::default();

        if let Some(k) = self.top_k {
            config.top_k = k;
        }
        if let Some(length) = self.window {
            config.window = length;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(crane) = self.crane {
            config.crane = crane;
        }
        if let Some(enabled) = self.spelled_digits {
            config.spelled_digits = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}
