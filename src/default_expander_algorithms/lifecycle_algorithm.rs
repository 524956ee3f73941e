use std::collections::BTreeMap;
use log::{debug, error};
use crate::default_expander_algorithms::random_algorithm::RandomExpanderAlgorithm;
use crate::expander_algorithm::{ExpanderAlgorithm, ScaleUpOption};
use crate::expander_config::ExpanderConfig;
use crate::expander_metrics::{DecisionMetrics, DecisionOutcome, MetricsLogger};
use crate::node::NodeInfo;
use crate::pod::Pod;
use crate::schedule_priority::SchedulePriority;

/// Steers scale ups of the tier of interest to the node group whose
/// lifecycle (normal or spot) matches the pod's schedule priority.
/// Options the lifecycle logic can not narrow down are delegated to the
/// fallback algorithm.
pub struct LifecycleExpanderAlgorithm {
    config: ExpanderConfig,
    fallback: Box<dyn ExpanderAlgorithm>,
    metrics_logger: Box<dyn MetricsLogger>,
}

impl LifecycleExpanderAlgorithm {
    pub fn new(config: ExpanderConfig, metrics_logger: Box<dyn MetricsLogger>) -> Self {
        Self {
            config,
            fallback: Box::new(RandomExpanderAlgorithm::new()),
            metrics_logger,
        }
    }

    pub fn with_fallback(config: ExpanderConfig, fallback: Box<dyn ExpanderAlgorithm>,
                         metrics_logger: Box<dyn MetricsLogger>) -> Self {
        Self {
            config,
            fallback,
            metrics_logger,
        }
    }

    /// First pod carrying the tier-of-interest label, in option order
    /// then pod order.
    fn find_replica_pod<'a>(&self, options: &'a Vec<ScaleUpOption>) -> Option<&'a Pod> {
        for option in options {
            for pod in &option.pods {
                if pod.label(&self.config.tier_label) == Some(&self.config.tier_of_interest) {
                    return Some(pod);
                }
            }
        }
        None
    }

    /// Decodes the schedule priority hint of the pod. The decode is total:
    /// a missing env var or a non-integer value yields `Ignore`.
    pub fn get_schedule_priority(&self, pod: &Pod) -> SchedulePriority {
        match pod.env_value(&self.config.priority_env_name) {
            Some(value) => match value.parse::<i64>() {
                Ok(priority) => SchedulePriority::from(priority),
                Err(_) => SchedulePriority::Ignore,
            },
            None => {
                error!("can not find schedule priority by env {} on pod {}",
                       self.config.priority_env_name, pod.name);
                SchedulePriority::Ignore
            }
        }
    }

    /// Lifecycles acceptable for new capacity hosting the pod.
    /// With `OneNormal` the first replica of a label-identical group goes to
    /// normal capacity and every following one to spot; the balance is
    /// recomputed from the snapshot on every call.
    pub fn schedule_lifecycles(&self, pod: &Pod, nodes: &BTreeMap<String, NodeInfo>) -> Vec<String> {
        let schedule_priority = self.get_schedule_priority(pod);
        match schedule_priority {
            SchedulePriority::AllNormal => vec![self.config.normal_lifecycle.clone()],
            SchedulePriority::AllSpot => vec![self.config.spot_lifecycle.clone()],
            SchedulePriority::OneNormal => {
                let mut is_scheduled_normal = false;
                let mut is_scheduled_spot = false;
                for (node_name, node_info) in nodes {
                    for other in node_info.pods() {
                        if !pod.has_same_labels(other) {
                            continue;
                        }
                        match node_info.node.label(&self.config.lifecycle_label) {
                            Some(lifecycle) if *lifecycle == self.config.normal_lifecycle => {
                                is_scheduled_normal = true;
                            }
                            Some(lifecycle) if *lifecycle == self.config.spot_lifecycle => {
                                is_scheduled_spot = true;
                            }
                            lifecycle => {
                                error!("node={} lifecycle label value={:?} error", node_name, lifecycle);
                            }
                        }
                    }
                }
                debug!("pod={} siblings already scheduled in normal={} spot={} schedule_priority={}",
                       pod.name, is_scheduled_normal, is_scheduled_spot, schedule_priority);
                if is_scheduled_normal {
                    vec![self.config.spot_lifecycle.clone()]
                } else {
                    vec![self.config.normal_lifecycle.clone()]
                }
            }
            SchedulePriority::Ignore | SchedulePriority::AllRandom => {
                vec![self.config.normal_lifecycle.clone(), self.config.spot_lifecycle.clone()]
            }
        }
    }
}

impl ExpanderAlgorithm for LifecycleExpanderAlgorithm {
    fn best_option(&mut self, options: &Vec<ScaleUpOption>,
                   nodes: &BTreeMap<String, NodeInfo>) -> Option<ScaleUpOption> {
        let replica_pod = match self.find_replica_pod(options) {
            Some(pod) => pod,
            None => {
                debug!("no replica pod among {} scale up options", options.len());
                let picked = self.fallback.best_option(options, nodes);
                self.metrics_logger.log_decision(DecisionMetrics::new(
                    None, Vec::default(), options.len(), options.len(), DecisionOutcome::Delegated));
                return picked;
            }
        };
        let lifecycles = self.schedule_lifecycles(replica_pod, nodes);
        debug!("pod={} should scale lifecycle={:?}", replica_pod.name, lifecycles);

        let mut new_options = Vec::new();
        for option in options {
            for lifecycle in &lifecycles {
                if option.node_group_id.contains(lifecycle.as_str()) {
                    new_options.push(option.clone());
                    break;
                }
            }
        }

        debug!("lifecycle={:?} matched {} of {} scale up options",
               lifecycles, new_options.len(), options.len());
        if new_options.is_empty() {
            debug!("no node group can match lifecycle={:?}", lifecycles);
            self.metrics_logger.log_decision(DecisionMetrics::new(
                Some(replica_pod.name.clone()), lifecycles, options.len(), 0, DecisionOutcome::NoMatch));
            return None;
        }
        if new_options.len() == 1 {
            self.metrics_logger.log_decision(DecisionMetrics::new(
                Some(replica_pod.name.clone()), lifecycles, options.len(), 1, DecisionOutcome::Selected));
            return new_options.pop();
        }
        let cnt_matching = new_options.len();
        let picked = self.fallback.best_option(&new_options, nodes);
        self.metrics_logger.log_decision(DecisionMetrics::new(
            Some(replica_pod.name.clone()), lifecycles, options.len(), cnt_matching, DecisionOutcome::Delegated));
        picked
    }
}
