use std::collections::BTreeMap;
use serde::Serialize;
use crate::default_expander_algorithms::lifecycle_algorithm::LifecycleExpanderAlgorithm;
use crate::default_expander_algorithms::most_pods_algorithm::MostPodsExpanderAlgorithm;
use crate::default_expander_algorithms::random_algorithm::RandomExpanderAlgorithm;
use crate::expander_config::ExpanderConfig;
use crate::expander_metrics::EmptyMetricsLogger;
use crate::node::NodeInfo;
use crate::pod::Pod;

/// Candidate node group offered for a scale up, with the pods it would host.
/// Node group ids bind to a lifecycle by substring convention
/// ("search-replica-spot-group" serves spot capacity).
#[derive(Clone, Serialize)]
pub struct ScaleUpOption {
    pub node_group_id: String,
    pub pods: Vec<Pod>,
}

impl ScaleUpOption {
    pub fn new(node_group_id: &str, pods: Vec<Pod>) -> Self {
        Self {
            node_group_id: node_group_id.to_string(),
            pods,
        }
    }
}

pub trait ExpanderAlgorithm {
    /// Picks the best scale up option, returns None if no option is acceptable.
    fn best_option(&mut self, options: &Vec<ScaleUpOption>,
                   nodes: &BTreeMap<String, NodeInfo>) -> Option<ScaleUpOption>;
}

pub fn expander_algorithm_resolver(name: &str, config: ExpanderConfig) -> Box<dyn ExpanderAlgorithm> {
    match name {
        "random" => Box::new(RandomExpanderAlgorithm::new()),
        "most-pods" => Box::new(MostPodsExpanderAlgorithm::new()),
        "lifecycle" => Box::new(LifecycleExpanderAlgorithm::new(config, Box::new(EmptyMetricsLogger {}))),
        _ => panic!("Unknown expander algorithm {}", name),
    }
}
