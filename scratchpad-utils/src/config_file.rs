use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const DEFAULT_SAMPLE_COUNT: usize = 3;

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub sample_count: Option<usize>,
    pub choice_count: Option<usize>,
    pub items: Option<Vec<Value>>,
    pub mapping: Option<Map<String, Value>>,
}

impl Config {
    pub fn sample_count(&self) -> usize {
        self.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT)
    }

    pub fn choice_count(&self) -> usize {
        self.choice_count.unwrap_or(DEFAULT_SAMPLE_COUNT)
    }

    /// Sequence to sample from; `10, 20, ..., 100` unless configured.
    pub fn items(&self) -> Vec<Value> {
        match &self.items {
            Some(items) => items.clone(),
            None => (1..=10).map(|i| Value::from(i * 10)).collect(),
        }
    }

    /// Mapping whose values are sampled; `k1 -> v11` through `k8 -> v88`
    /// unless configured. Keys stay in file order.
    pub fn mapping(&self) -> Map<String, Value> {
        match &self.mapping {
            Some(mapping) => mapping.clone(),
            None => (1..=8)
                .map(|i| (format!("k{}", i), Value::from(format!("v{}{}", i, i))))
                .collect(),
        }
    }
}

pub fn read_config(path: &Path) -> Result<Config> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;
    let config: Config = serde_json::from_reader(file)
        .context("Failed to parse config file")?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

pub fn read_config_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => read_config(path),
        None => Ok(Config::default()),
    }
}
