//! Scale up option selection for a cluster autoscaler.

pub mod default_expander_algorithms;
pub mod expander_algorithm;
pub mod expander_config;
pub mod expander_metrics;
pub mod node;
pub mod pod;
pub mod schedule_priority;
