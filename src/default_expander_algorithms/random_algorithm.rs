use std::collections::BTreeMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use crate::expander_algorithm::{ExpanderAlgorithm, ScaleUpOption};
use crate::node::NodeInfo;

/// Uniform-random tie break over the offered scale up options.
pub struct RandomExpanderAlgorithm {
    rng: StdRng,
}

impl RandomExpanderAlgorithm {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ExpanderAlgorithm for RandomExpanderAlgorithm {
    fn best_option(&mut self, options: &Vec<ScaleUpOption>,
                   nodes: &BTreeMap<String, NodeInfo>) -> Option<ScaleUpOption> {
        options.choose(&mut self.rng).cloned()
    }
}
