//! Application configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::warn;

use crate::pipeline::SizeConfig;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "datasets/medium_topics.json";
/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";
/// Topic whose graph is shown before the first search
pub const DEFAULT_TOPIC: &str = "Life";
/// Rows per page of the popular-topics table
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Server settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub default_topic: String,
    pub page_size: usize,
    pub sizes: SizeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8050)),
            default_topic: DEFAULT_TOPIC.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            sizes: SizeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read `MEDIAL_*` environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let dataset_path = match lookup("MEDIAL_DATASET_PATH") {
            Some(path) if Path::new(&path).is_absolute() => PathBuf::from(path),
            Some(path) => current_dir.join(path),
            None => current_dir.join(DEFAULT_DATASET_PATH),
        };

        let mut sizes = SizeConfig {
            min_size: parse_or(&lookup, "MEDIAL_MIN_NODE_SIZE", defaults.sizes.min_size),
            max_size: parse_or(&lookup, "MEDIAL_MAX_NODE_SIZE", defaults.sizes.max_size),
            default_size: parse_or(&lookup, "MEDIAL_DEFAULT_NODE_SIZE", defaults.sizes.default_size),
        };
        if sizes.min_size > sizes.max_size {
            warn!(
                "MEDIAL_MIN_NODE_SIZE {} exceeds MEDIAL_MAX_NODE_SIZE {}, swapping",
                sizes.min_size, sizes.max_size
            );
            std::mem::swap(&mut sizes.min_size, &mut sizes.max_size);
        }

        Self {
            dataset_path,
            bind_addr: parse_or(&lookup, "MEDIAL_BIND_ADDR", defaults.bind_addr),
            default_topic: lookup("MEDIAL_DEFAULT_TOPIC").unwrap_or(defaults.default_topic),
            page_size: parse_or(&lookup, "MEDIAL_PAGE_SIZE", defaults.page_size).max(1),
            sizes,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value '{}' for {}, using {:?}", raw, key, default);
            default
        }),
        None => default,
    }
}
