//! Builder Configuration
//!
//! Tunable constants of the learning procedure.
use crate::constants::DEFAULT_MIN_LEAF_SIZE;
use crate::errors::Id3Error;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How split features are consumed while the tree grows.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FeatureConsumption {
    /// Each child gets its own copy of the remaining features, so a feature
    /// is used at most once per root-to-leaf path.
    #[default]
    PerBranch,
    /// One set shared by the whole tree, so a feature is used at most once
    /// overall. The left subtree is grown, and consumes, first.
    Global,
}

impl FromStr for FeatureConsumption {
    type Err = Id3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PerBranch" => Ok(FeatureConsumption::PerBranch),
            "Global" => Ok(FeatureConsumption::Global),
            _ => Err(Id3Error::ParseString(
                s.to_string(),
                "FeatureConsumption".to_string(),
                items_to_strings(vec!["PerBranch", "Global"]),
            )),
        }
    }
}

fn default_min_leaf_size() -> usize {
    DEFAULT_MIN_LEAF_SIZE
}

/// Configuration for the `Id3Builder`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Slices with this many records or fewer become leaves.
    #[serde(default = "default_min_leaf_size")]
    pub min_leaf_size: usize,
    /// Per-branch or global feature consumption.
    #[serde(default)]
    pub feature_consumption: FeatureConsumption,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            min_leaf_size: default_min_leaf_size(),
            feature_consumption: FeatureConsumption::default(),
        }
    }
}

impl BuilderConfig {
    /// Parse a configuration from JSON, absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Id3Error> {
        serde_json::from_str(json).map_err(|e| Id3Error::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, Id3Error> {
        serde_json::to_string(self).map_err(|e| Id3Error::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = BuilderConfig::default();
        assert_eq!(cfg.min_leaf_size, 3);
        assert_eq!(cfg.feature_consumption, FeatureConsumption::PerBranch);
        assert_eq!(BuilderConfig::from_json("{}").unwrap(), cfg);
    }

    #[test]
    fn test_from_json() {
        let cfg = BuilderConfig::from_json(r#"{"min_leaf_size": 4, "feature_consumption": "Global"}"#).unwrap();
        assert_eq!(cfg.min_leaf_size, 4);
        assert_eq!(cfg.feature_consumption, FeatureConsumption::Global);
        assert_eq!(BuilderConfig::from_json(&cfg.to_json().unwrap()).unwrap(), cfg);
        assert!(matches!(
            BuilderConfig::from_json(r#"{"min_leaf_size": -1}"#),
            Err(Id3Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parse_consumption() {
        assert_eq!("Global".parse::<FeatureConsumption>().unwrap(), FeatureConsumption::Global);
        assert_eq!(
            "PerBranch".parse::<FeatureConsumption>().unwrap(),
            FeatureConsumption::PerBranch
        );
        assert_eq!(
            "Shared".parse::<FeatureConsumption>().unwrap_err(),
            Id3Error::ParseString(
                "Shared".to_string(),
                "FeatureConsumption".to_string(),
                "PerBranch, Global".to_string()
            )
        );
    }
}
