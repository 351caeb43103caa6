//! Configuration utility functions
//!
//! Helpers for reading configuration values from environment variables. The
//! lookup is passed in so that callers (and tests) can substitute the process
//! environment.

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;
use std::str::FromStr;

/// Source of environment variables.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Reads a variable from the process environment, treating empty values as unset.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get a path value from an environment variable
pub fn get_env_path(env: EnvLookup<'_>, key: &str) -> Option<PathBuf> {
    env(key).map(PathBuf::from)
}

/// Get a f64 value from an environment variable. Unparseable values are an error.
pub fn get_env_f64(env: EnvLookup<'_>, key: &str) -> CoreResult<Option<f64>> {
    env(key)
        .map(|val| {
            val.trim()
                .parse::<f64>()
                .map_err(|_| CoreError::Config(format!("{key} must be a number, got '{val}'")))
        })
        .transpose()
}

/// Get a value parsed through its `FromStr` implementation from an environment variable
pub fn get_env_parsed<T>(env: EnvLookup<'_>, key: &str) -> CoreResult<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    env(key)
        .map(|val| {
            val.parse::<T>()
                .map_err(|e| CoreError::Config(format!("{key}: {e}")))
        })
        .transpose()
}
