use crate::types::Edition;
use std::env;
use std::path::PathBuf;

pub const ENV_EDITION: &str = "MANDAS_EDITION";
pub const ENV_SEED: &str = "MANDAS_SEED";
pub const ENV_WORDS: &str = "MANDAS_WORDS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub edition: Edition,
    // Fixed seed for reproducible rounds; drawn from entropy when unset.
    pub seed: Option<u64>,
    // Alternate words document; the embedded one is used when unset.
    pub words_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let edition = lookup(ENV_EDITION)
            .and_then(|v| Edition::parse(&v))
            .unwrap_or_default();
        let seed = lookup(ENV_SEED).and_then(|v| v.trim().parse::<u64>().ok());
        let words_path = lookup(ENV_WORDS)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            edition,
            seed,
            words_path,
        }
    }
}
