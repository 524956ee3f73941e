use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use serde::Serialize;

/// How a single scale up decision was resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DecisionOutcome {
    Selected,
    Delegated,
    NoMatch,
}

impl Display for DecisionOutcome {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            DecisionOutcome::Selected => write!(f, "selected"),
            DecisionOutcome::Delegated => write!(f, "delegated"),
            DecisionOutcome::NoMatch => write!(f, "no-match"),
        }
    }
}

#[derive(Clone, Serialize)]
pub struct DecisionMetrics {
    pub pod_name: Option<String>,
    pub lifecycles: Vec<String>,
    pub cnt_options: usize,
    pub cnt_matching: usize,
    pub outcome: DecisionOutcome,
}

impl DecisionMetrics {
    pub fn new(pod_name: Option<String>, lifecycles: Vec<String>, cnt_options: usize,
               cnt_matching: usize, outcome: DecisionOutcome) -> Self {
        Self {
            pod_name,
            lifecycles,
            cnt_options,
            cnt_matching,
            outcome
        }
    }
}

pub trait MetricsLogger {
    fn log_decision(&mut self, metrics: DecisionMetrics);
    fn save_log(&mut self, path: &str) -> Result<(), std::io::Error>;
}

pub struct EmptyMetricsLogger {}

impl MetricsLogger for EmptyMetricsLogger {
    fn log_decision(&mut self, metrics: DecisionMetrics) {}

    fn save_log(&mut self, path: &str) -> Result<(), Error> {
        Ok(())
    }
}

pub struct StdoutMetricsLogger {}

impl MetricsLogger for StdoutMetricsLogger {
    fn log_decision(&mut self, metrics: DecisionMetrics) {
        println!("Pod: {:?}, lifecycles: {:?}, options: {}, matching: {}, outcome: {}",
                 metrics.pod_name, metrics.lifecycles, metrics.cnt_options,
                 metrics.cnt_matching, metrics.outcome)
    }

    fn save_log(&mut self, path: &str) -> Result<(), Error> {
        Ok(())
    }
}

pub struct FileMetricsLogger {
    decision_history: Vec<DecisionMetrics>,
}

impl FileMetricsLogger {
    pub fn new() -> Self {
        Self {
            decision_history: Vec::default(),
        }
    }

    pub fn decision_history(&self) -> &Vec<DecisionMetrics> {
        &self.decision_history
    }
}

impl MetricsLogger for FileMetricsLogger {
    fn log_decision(&mut self, metrics: DecisionMetrics) {
        self.decision_history.push(metrics);
    }

    fn save_log(&mut self, path: &str) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &self.decision_history)?;
        writer.flush()
    }
}
