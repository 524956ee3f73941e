//! Expander configuration.

use serde::{Deserialize, Serialize};

/// Holds raw expander config parsed from YAML file.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
struct RawExpanderConfig {
    pub lifecycle_label: Option<String>,
    pub tier_label: Option<String>,
    pub tier_of_interest: Option<String>,
    pub priority_env_name: Option<String>,
    pub normal_lifecycle: Option<String>,
    pub spot_lifecycle: Option<String>,
}

/// Represents expander configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ExpanderConfig {
    /// Node label key holding the lifecycle value.
    pub lifecycle_label: String,
    /// Pod label key marking the workload tier.
    pub tier_label: String,
    /// Tier label value of the pod driving the lifecycle decision.
    pub tier_of_interest: String,
    /// Name of the env var carrying the integer-encoded schedule priority.
    pub priority_env_name: String,
    /// Lifecycle value of stable on-demand capacity.
    pub normal_lifecycle: String,
    /// Lifecycle value of preemptible capacity.
    pub spot_lifecycle: String,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            lifecycle_label: "node.kubernetes.io/lifecycle".to_string(),
            tier_label: "tier".to_string(),
            tier_of_interest: "search-replica".to_string(),
            priority_env_name: "indexPriority".to_string(),
            normal_lifecycle: "normal".to_string(),
            spot_lifecycle: "spot".to_string(),
        }
    }
}

impl ExpanderConfig {
    pub fn from_file(file_name: &str) -> Self {
        let raw: RawExpanderConfig = serde_yaml::from_str(
            &std::fs::read_to_string(file_name).unwrap_or_else(|_| panic!("Can't read file {}", file_name)),
        ).unwrap_or_else(|_| panic!("Can't parse YAML from file {}", file_name));

        Self {
            lifecycle_label: raw.lifecycle_label.unwrap_or("node.kubernetes.io/lifecycle".to_string()),
            tier_label: raw.tier_label.unwrap_or("tier".to_string()),
            tier_of_interest: raw.tier_of_interest.unwrap_or("search-replica".to_string()),
            priority_env_name: raw.priority_env_name.unwrap_or("indexPriority".to_string()),
            normal_lifecycle: raw.normal_lifecycle.unwrap_or("normal".to_string()),
            spot_lifecycle: raw.spot_lifecycle.unwrap_or("spot".to_string()),
        }
    }
}
