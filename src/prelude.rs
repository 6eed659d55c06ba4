pub use crate::cache::BoundedCache;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::order::{NodeId, RecencyList};
pub use crate::traits::{CoreCache, MutableCache, RecencyCache};

#[cfg(feature = "metrics")]
pub use crate::metrics::CacheMetricsSnapshot;
