use std::collections::BTreeMap;
use log::debug;
use crate::default_expander_algorithms::random_algorithm::RandomExpanderAlgorithm;
use crate::expander_algorithm::{ExpanderAlgorithm, ScaleUpOption};
use crate::node::NodeInfo;

/// Picks the scale up option that would schedule the most pods,
/// ties are delegated to the fallback algorithm.
pub struct MostPodsExpanderAlgorithm {
    fallback: Box<dyn ExpanderAlgorithm>,
}

impl MostPodsExpanderAlgorithm {
    pub fn new() -> Self {
        Self {
            fallback: Box::new(RandomExpanderAlgorithm::new()),
        }
    }

    pub fn with_fallback(fallback: Box<dyn ExpanderAlgorithm>) -> Self {
        Self {
            fallback,
        }
    }
}

impl ExpanderAlgorithm for MostPodsExpanderAlgorithm {
    fn best_option(&mut self, options: &Vec<ScaleUpOption>,
                   nodes: &BTreeMap<String, NodeInfo>) -> Option<ScaleUpOption> {
        let max_pods = options.iter().map(|option| option.pods.len()).max()?;
        let mut new_options = Vec::new();
        for option in options {
            if option.pods.len() == max_pods {
                new_options.push(option.clone());
            }
        }
        debug!("{} options schedule the most pods ({})", new_options.len(), max_pods);
        if new_options.len() == 1 {
            return new_options.pop();
        }
        self.fallback.best_option(&new_options, nodes)
    }
}
