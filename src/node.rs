//! Representation of the k8s node

use std::collections::HashMap;
use serde::Serialize;
use crate::pod::Pod;

#[derive(Clone, Serialize)]
pub struct Node {
    pub name: String,
    pub labels: HashMap<String, String>,
}

impl Node {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            labels: HashMap::new(),
        }
    }

    pub fn set_label(&mut self, key: &str, value: &str) {
        self.labels.insert(key.to_string(), value.to_string());
    }

    pub fn label(&self, key: &str) -> Option<&String> {
        self.labels.get(key)
    }
}

/// A node together with the pods currently assigned to it.
/// A snapshot of the cluster is a `BTreeMap<String, NodeInfo>` keyed by node name.
#[derive(Clone, Serialize)]
pub struct NodeInfo {
    pub node: Node,
    pods: Vec<Pod>,
}

impl NodeInfo {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            pods: Vec::default(),
        }
    }

    pub fn add_pod(&mut self, pod: Pod) {
        self.pods.push(pod);
    }

    pub fn pods(&self) -> &Vec<Pod> {
        &self.pods
    }
}
