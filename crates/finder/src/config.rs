//! Configuration for Sunday-Christmas queries.

use std::fmt;
use std::str::FromStr;

use crate::error::FinderError;

/// Enumeration strategy.
///
/// All methods return identical results; they differ only in how many
/// day-of-week evaluations they perform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Evaluate every year of the range.
    Direct,
    /// Replicate a 28-year signature across stable stretches and verify
    /// each replicated year.
    #[default]
    Optimized,
    /// Pull years one at a time from [`SundayChristmases`](crate::SundayChristmases).
    Lazy,
}

impl Method {
    /// Lower-case method name as accepted by [`Method::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Optimized => "optimized",
            Self::Lazy => "lazy",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "direct" | "basic" | "calendar" => Ok(Self::Direct),
            "optimized" | "optimised" | "cycle" => Ok(Self::Optimized),
            "lazy" | "generator" => Ok(Self::Lazy),
            _ => Err(FinderError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration for a [`Finder`](crate::Finder).
///
/// # Example
///
/// ```
/// use yuletide_finder::{FinderConfig, Method};
///
/// let config = FinderConfig::new()
///     .with_method(Method::Direct)
///     .with_cache(false);
///
/// assert_eq!(config.method(), Method::Direct);
/// assert!(!config.cache());
/// ```
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Enumeration strategy.
    method: Method,
    /// Whether results are memoised per range.
    cache: bool,
}

impl FinderConfig {
    /// Creates a new configuration.
    ///
    /// Defaults: `method = Optimized`, `cache = true`.
    pub fn new() -> Self {
        Self {
            method: Method::Optimized,
            cache: true,
        }
    }

    /// Sets the enumeration strategy.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Enables or disables the per-range cache.
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// Returns the enumeration strategy.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns whether the per-range cache is enabled.
    pub fn cache(&self) -> bool {
        self.cache
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = FinderConfig::default();
        assert_eq!(cfg.method(), Method::Optimized);
        assert!(cfg.cache());
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = FinderConfig::new()
            .with_method(Method::Lazy)
            .with_cache(false);
        assert_eq!(cfg.method(), Method::Lazy);
        assert!(!cfg.cache());
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("direct".parse::<Method>().unwrap(), Method::Direct);
        assert_eq!("Optimized".parse::<Method>().unwrap(), Method::Optimized);
        assert_eq!("generator".parse::<Method>().unwrap(), Method::Lazy);
        assert_eq!("basic".parse::<Method>().unwrap(), Method::Direct);
    }

    #[test]
    fn test_method_parse_unknown() {
        assert_eq!(
            "fast".parse::<Method>().unwrap_err(),
            FinderError::UnknownMethod {
                name: "fast".to_string()
            }
        );
    }

    #[test]
    fn test_method_display_roundtrip() {
        for m in [Method::Direct, Method::Optimized, Method::Lazy] {
            assert_eq!(m.to_string().parse::<Method>().unwrap(), m);
        }
    }
}
