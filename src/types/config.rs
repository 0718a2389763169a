use std::env;

use crate::prelude::*;
use crate::types::ExtractFlags;

pub const EXTRACT_FLAGS_VAR: &str = "FASTQUEUE_EXTRACT_FLAGS";
pub const CAPACITY_VAR: &str = "FASTQUEUE_CAPACITY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueConfig {
    pub extract_flags: ExtractFlags,
    pub capacity: usize,
}

impl QueueConfig {
    pub fn new(extract_flags: ExtractFlags, capacity: usize) -> Self {
        Self {
            extract_flags,
            capacity,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut out = Self::default();

        if let Some(flags) = lookup(EXTRACT_FLAGS_VAR) {
            match flags.parse() {
                Ok(flags) => out.extract_flags = flags,
                Err(e) => warn!("{}, reverting to {}", e, out.extract_flags),
            }
        }

        if let Some(capacity) = lookup(CAPACITY_VAR) {
            match capacity.trim().parse() {
                Ok(capacity) => out.capacity = capacity,
                Err(_) => warn!("invalid capacity {:?}, reverting to {}", capacity, out.capacity),
            }
        }

        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = QueueConfig::from_lookup(lookup(&[]));
        assert_eq!(config, QueueConfig::new(ExtractFlags::Data, 0));
    }

    #[test]
    fn test_from_vars() {
        let vars = [(EXTRACT_FLAGS_VAR, "both"), (CAPACITY_VAR, " 128 ")];
        let config = QueueConfig::from_lookup(lookup(&vars));
        assert_eq!(config.extract_flags, ExtractFlags::Both);
        assert_eq!(config.capacity, 128);
    }

    #[test]
    fn test_invalid_vars() {
        let vars = [(EXTRACT_FLAGS_VAR, "foo"), (CAPACITY_VAR, "-1")];
        let config = QueueConfig::from_lookup(lookup(&vars));
        assert_eq!(config, QueueConfig::default());
    }
}
