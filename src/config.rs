//! JSON configuration for engines.
//!
//! Tapes are written as bit strings in position order: the first character is
//! position 0. Underscores and whitespace may be used as separators.
//!
//! ```rust
//! use monotone::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(
//!     r#"{ "initial_state": 9, "work": "0110", "work_head": 3, "input": "101" }"#,
//! )
//! .unwrap();
//! let engine = config.build().unwrap();
//! assert_eq!(engine.work_tape_value().to_string(), "6");
//! ```

use crate::builder::{BuildError, EngineBuilder};
use crate::engine::TransitionEngine;
use crate::limits::{LimitsBuilder, RunLimits, ViolationStrategy};
use crate::tape::BitVector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse engine configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid character {found:?} at index {index} of `{field}`; expected 0 or 1")]
    InvalidBit {
        field: &'static str,
        index: usize,
        found: char,
    },

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Serializable engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub initial_state: u8,
    /// Input tape bits, position 0 first
    pub input: String,
    /// Initial work tape bits, position 0 first
    pub work: String,
    pub work_head: u64,
    pub record_history: bool,
    pub limits: Option<LimitsConfig>,
}

/// Serializable form of [`RunLimits`]. Custom checks are code-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    pub max_steps: Option<u64>,
    pub max_tape_bits: Option<u64>,
    pub on_violation: ViolationStrategy,
}

impl LimitsConfig {
    pub fn to_limits(&self) -> RunLimits {
        let mut builder = LimitsBuilder::new().on_violation(self.on_violation);
        if let Some(max) = self.max_steps {
            builder = builder.max_steps(max);
        }
        if let Some(bits) = self.max_tape_bits {
            builder = builder.max_tape_bits(bits);
        }
        builder.build()
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turn the configuration into a builder, parsing the tape strings.
    pub fn into_builder(self) -> Result<EngineBuilder, ConfigError> {
        let mut builder = EngineBuilder::new()
            .initial_state(self.initial_state)
            .input_tape(parse_bits("input", &self.input)?)
            .work_tape(parse_bits("work", &self.work)?)
            .work_head(self.work_head)
            .record_history(self.record_history);
        if let Some(limits) = &self.limits {
            builder = builder.limits(limits.to_limits());
        }
        Ok(builder)
    }

    pub fn build(self) -> Result<TransitionEngine, ConfigError> {
        Ok(self.into_builder()?.build()?)
    }
}

/// Parse a bit string in position order.
pub fn parse_bits(field: &'static str, text: &str) -> Result<BitVector, ConfigError> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| *c != '_' && !c.is_whitespace())
        .map(|(index, found)| match found {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(ConfigError::InvalidBit {
                field,
                index,
                found,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MachineState;

    #[test]
    fn empty_object_uses_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        let engine = config.build().unwrap();
        assert_eq!(engine.state(), MachineState::INITIAL);
        assert!(engine.history().is_none());
    }

    #[test]
    fn parses_full_configuration() {
        let json = r#"{
            "initial_state": 15,
            "input": "1101",
            "work": "0000_1",
            "work_head": 2,
            "record_history": true,
            "limits": { "max_steps": 50, "max_tape_bits": 128, "on_violation": "warn" }
        }"#;

        let config = EngineConfig::from_json(json).unwrap();
        let limits = config.limits.clone().unwrap();
        assert_eq!(limits.max_steps, Some(50));
        assert_eq!(limits.on_violation, ViolationStrategy::Warn);

        let engine = config.build().unwrap();
        assert_eq!(engine.state(), MachineState::IO_DECIDE);
        assert_eq!(engine.input_tape_value(), &BitVector::from(0b1011));
        assert_eq!(engine.work_tape_value(), &BitVector::from(0b10000));
        assert_eq!(engine.work_head(), 2);
        assert!(engine.history().is_some());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = EngineConfig::from_json(r#"{ "tapes": 3 }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_non_binary_characters() {
        let result = parse_bits("input", "10a1");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBit {
                field: "input",
                index: 2,
                found: 'a'
            })
        ));
    }

    #[test]
    fn invalid_state_surfaces_build_error() {
        let config = EngineConfig {
            initial_state: 40,
            ..EngineConfig::default()
        };

        assert!(matches!(
            config.build(),
            Err(ConfigError::Build(BuildError::InvalidState { state: 40 }))
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = EngineConfig {
            input: "101".to_string(),
            limits: Some(LimitsConfig {
                max_steps: Some(10),
                ..LimitsConfig::default()
            }),
            ..EngineConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
