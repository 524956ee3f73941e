//! Representation of the k8s pod

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use serde::Serialize;

/// Pod status
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum PodStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl Display for PodStatus {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PodStatus::Pending => write!(f, "pending"),
            PodStatus::Running => write!(f, "running"),
            PodStatus::Succeeded => write!(f, "succeeded"),
            PodStatus::Failed => write!(f, "failed"),
            PodStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Clone, Serialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Clone, Serialize)]
pub struct Container {
    pub name: String,
    pub env: Vec<EnvVar>,
}

impl Container {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            env: Vec::default(),
        }
    }
}

#[derive(Clone, Serialize)]
pub struct Pod {
    pub name: String,
    pub labels: HashMap<String, String>,
    pub containers: Vec<Container>,
    pub status: PodStatus,
}

impl Pod {
    pub fn new(name: &str, status: PodStatus) -> Self {
        Self {
            name: name.to_string(),
            labels: HashMap::new(),
            containers: Vec::default(),
            status,
        }
    }

    pub fn set_label(&mut self, key: &str, value: &str) {
        self.labels.insert(key.to_string(), value.to_string());
    }

    pub fn label(&self, key: &str) -> Option<&String> {
        self.labels.get(key)
    }

    /// Value of the named env var declared on the first container.
    pub fn env_value(&self, env_name: &str) -> Option<&String> {
        let container = self.containers.first()?;
        for env in &container.env {
            if env.name == env_name {
                return Some(&env.value);
            }
        }
        None
    }

    /// Whether the two pods carry an identical label mapping.
    /// Sizes must match and every key/value must be present in both directions.
    pub fn has_same_labels(&self, other: &Pod) -> bool {
        if self.labels.len() != other.labels.len() {
            return false;
        }
        for (key, value) in &self.labels {
            match other.labels.get(key) {
                Some(v) if v == value => {}
                _ => return false,
            }
        }
        for (key, value) in &other.labels {
            match self.labels.get(key) {
                Some(v) if v == value => {}
                _ => return false,
            }
        }
        true
    }
}
