//! Failure types surfaced by the cache.
//!
//! The library has exactly one fatal condition, a zero capacity at
//! construction, and one diagnostic condition, a failed consistency check.
//! [`ConfigError`] covers the former, [`InvariantError`] the latter. Lookup
//! misses are not represented here at all: every cache operation reports
//! absence through its `Option` return.
//!
//! ```
//! use boundedcache::cache::BoundedCache;
//! use boundedcache::error::ConfigError;
//!
//! fn build(slots: usize) -> Result<BoundedCache<u64, u64>, ConfigError> {
//!     BoundedCache::new(slots)
//! }
//!
//! assert_eq!(build(0).unwrap_err(), ConfigError::ZeroCapacity);
//! assert!(build(8).is_ok());
//! ```

use std::error::Error;
use std::fmt;

/// Rejected cache configuration.
///
/// [`BoundedCache::new`](crate::cache::BoundedCache::new) returns this
/// instead of constructing a cache that could never hold an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested capacity was zero.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => {
                f.write_str("cache capacity must be greater than zero")
            },
        }
    }
}

impl Error for ConfigError {}

/// A failed consistency check between the key index and the recency order.
///
/// Only produced by
/// [`BoundedCache::check_invariants`](crate::cache::BoundedCache::check_invariants);
/// no sequence of cache operations is expected to produce one. The detail
/// string names the first inconsistency found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError {
    detail: String,
}

impl InvariantError {
    pub(crate) fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Describes the inconsistency that was detected.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cache invariant violated: {}", self.detail)
    }
}

impl Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_names_the_constraint() {
        let msg = ConfigError::ZeroCapacity.to_string();
        assert!(msg.contains("capacity"));
        assert!(msg.contains("zero"));
    }

    #[test]
    fn config_error_boxes_as_dyn_error() {
        let boxed: Box<dyn Error> = Box::new(ConfigError::ZeroCapacity);
        assert!(!boxed.to_string().is_empty());
    }

    #[test]
    fn invariant_display_prefixes_the_detail() {
        let err = InvariantError::new("index holds 3 keys but order holds 2 entries");
        assert_eq!(
            err.to_string(),
            "cache invariant violated: index holds 3 keys but order holds 2 entries"
        );
        assert_eq!(err.detail(), "index holds 3 keys but order holds 2 entries");
    }

    #[test]
    fn invariant_errors_compare_by_detail() {
        let a = InvariantError::new("left");
        let b = InvariantError::new("left");
        assert_eq!(a, b);
        assert_ne!(a, InvariantError::new("right"));
    }
}
