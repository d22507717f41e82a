//! Engine configuration.
//!
//! ```toml
//! [settle]
//! timeout_ms = 120000
//! initial_backoff_ms = 500
//! max_backoff_ms = 5000
//! backoff_factor = 2
//! growth_steps = 4
//!
//! [settle.required_matches]
//! monitor = 1
//! maintenance_window = 3
//! integration = 1
//! ```
//!
//! Every key is optional and defaults to the value shown.

use crate::settle::{Backoff, SettlePolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use upkeep_core::{ExError, ExErrorKind, ResourceKind, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub settle: SettleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettleConfig {
    pub timeout_ms: u64,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub backoff_factor: u32,
    pub growth_steps: u32,
    pub required_matches: RequiredMatches,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 120_000,
            initial_backoff_ms: 500,
            max_backoff_ms: 5_000,
            backoff_factor: 2,
            growth_steps: 4,
            required_matches: RequiredMatches::default(),
        }
    }
}

/// Consecutive matching reads required per resource kind.
///
/// Maintenance windows default to 3: their remote read path is known to
/// flap between the old and new schedule for a while after a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequiredMatches {
    pub monitor: u32,
    pub maintenance_window: u32,
    pub integration: u32,
}

impl Default for RequiredMatches {
    fn default() -> Self {
        Self {
            monitor: 1,
            maintenance_window: 3,
            integration: 1,
        }
    }
}

impl RequiredMatches {
    pub fn for_kind(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Monitor => self.monitor,
            ResourceKind::MaintenanceWindow => self.maintenance_window,
            ResourceKind::Integration => self.integration,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the document does not parse or fails validation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(source).map_err(|e| {
            ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(e.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read, otherwise as [`EngineConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_message(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "engine config loaded");
        Ok(config)
    }

    /// # Errors
    ///
    /// `InvalidConfig` naming the offending keys.
    pub fn validate(&self) -> Result<()> {
        let s = &self.settle;
        let mut invalid = Vec::new();
        if s.timeout_ms == 0 {
            invalid.push("settle.timeout_ms");
        }
        if s.initial_backoff_ms == 0 {
            invalid.push("settle.initial_backoff_ms");
        }
        if s.max_backoff_ms < s.initial_backoff_ms {
            invalid.push("settle.max_backoff_ms");
        }
        if s.backoff_factor == 0 {
            invalid.push("settle.backoff_factor");
        }
        let required = &s.required_matches;
        for (key, count) in [
            ("settle.required_matches.monitor", required.monitor),
            ("settle.required_matches.maintenance_window", required.maintenance_window),
            ("settle.required_matches.integration", required.integration),
        ] {
            if count == 0 {
                invalid.push(key);
            }
        }

        if invalid.is_empty() {
            return Ok(());
        }
        Err(ExError::new(ExErrorKind::InvalidConfig)
            .with_op("validate_config")
            .with_message("settle configuration out of range")
            .with_fields(invalid.into_iter().map(String::from).collect()))
    }

    /// Settle policy for writes of `kind`.
    pub fn policy_for(&self, kind: ResourceKind) -> SettlePolicy {
        let s = &self.settle;
        let backoff = Backoff::new(
            Duration::from_millis(s.initial_backoff_ms),
            Duration::from_millis(s.max_backoff_ms),
        )
        .with_factor(s.backoff_factor)
        .with_growth_steps(s.growth_steps);

        SettlePolicy::new(Duration::from_millis(s.timeout_ms))
            .with_backoff(backoff)
            .with_required_matches(s.required_matches.for_kind(kind))
    }
}
