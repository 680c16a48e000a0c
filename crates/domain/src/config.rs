//! Validation settings loaded from environment variables.

use crate::error::ConfigError;

/// Default minimum length for first and last names.
pub const DEFAULT_NAME_MIN_LENGTH: usize = 2;

/// Default maximum length for first and last names.
pub const DEFAULT_NAME_MAX_LENGTH: usize = 40;

/// Inclusive character-count bounds applied to first and last names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameBounds {
    min: usize,
    max: usize,
}

impl NameBounds {
    /// Creates bounds, rejecting ranges that cannot admit any name.
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidNameBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum length (inclusive).
    pub fn min(&self) -> usize {
        self.min
    }

    /// Returns the maximum length (inclusive).
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns true if `value` has an admissible number of characters.
    pub fn admits(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

impl Default for NameBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_NAME_MIN_LENGTH,
            max: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

/// Validation configuration for the subscription handler.
///
/// Reads from environment variables:
/// - `NAME_MIN_LENGTH`: minimum name length (default: `2`)
/// - `NAME_MAX_LENGTH`: maximum name length (default: `40`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    pub name_bounds: NameBounds,
}

impl ValidationConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for variables that are not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let min = parse_or(&lookup, "NAME_MIN_LENGTH", DEFAULT_NAME_MIN_LENGTH)?;
        let max = parse_or(&lookup, "NAME_MAX_LENGTH", DEFAULT_NAME_MAX_LENGTH)?;

        Ok(Self {
            name_bounds: NameBounds::new(min, max)?,
        })
    }
}

fn parse_or<F>(lookup: &F, var: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}
