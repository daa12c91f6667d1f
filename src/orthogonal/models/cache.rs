//! Concurrent memoization of quadrature rules.
//!
//! [`QuadratureCache`] maps `(family, parameters, solver options, size)` to a
//! shared [`QuadratureRule`]. It sits outside the facade: families stay pure
//! values, and callers that repeatedly request the same rule opt into the
//! cache explicitly. Parameters are keyed by their bit patterns, so `0.0` and
//! `-0.0` are distinct keys and NaN never occurs (it is rejected at
//! construction).
//!
//! A cache built with [`QuadratureCache::new`] grows with every distinct key
//! and only shrinks on [`QuadratureCache::clear`]. Long-running callers that
//! sweep parameters should use [`QuadratureCache::with_limit`], which flushes
//! the map whenever a miss would exceed the limit.
use crate::{
    orthogonal::{
        core::{degree::Degree, families::FamilyTag},
        errors::{PolyError, PolyResult},
        models::family::OrthogonalFamily,
    },
    quadrature::rule::QuadratureRule,
};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RuleKey {
    tag: FamilyTag,
    params: Vec<u64>,
    max_iterations: usize,
    tolerance: u64,
    size: usize,
}

impl RuleKey {
    fn new(family: &OrthogonalFamily, size: usize) -> Self {
        let options = family.options();
        Self {
            tag: family.tag(),
            params: family.kind().parameters().iter().map(|p| p.to_bits()).collect(),
            max_iterations: options.max_iterations_per_eigenvalue(),
            tolerance: options.tolerance().to_bits(),
            size,
        }
    }
}

/// Thread-safe cache of quadrature rules.
///
/// Unbounded unless built with [`QuadratureCache::with_limit`]. Rules already
/// handed out stay alive through their `Arc` after a flush.
#[derive(Debug, Default)]
pub struct QuadratureCache {
    rules: DashMap<RuleKey, Arc<QuadratureRule>>,
    limit: Option<usize>,
}

impl QuadratureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `max_rules` rules (at least one).
    ///
    /// On a miss with the map full, every entry is dropped before the new
    /// rule is inserted. Under concurrent misses the bound can be exceeded
    /// by the number of racing inserts.
    pub fn with_limit(max_rules: usize) -> Self {
        Self { rules: DashMap::new(), limit: Some(max_rules.max(1)) }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Return the cached `size`-point rule of `family`, computing it on a miss.
    ///
    /// Failed computations are not cached. When two threads miss on the same
    /// key concurrently, both compute and the first insertion wins.
    ///
    /// # Errors
    /// Same as [`OrthogonalFamily::nodes_and_weights`].
    pub fn get_or_compute<D>(
        &self, family: &OrthogonalFamily, size: D,
    ) -> PolyResult<Arc<QuadratureRule>>
    where
        D: TryInto<Degree, Error = PolyError>,
    {
        let size = size.try_into()?.get();
        let key = RuleKey::new(family, size);
        if let Some(rule) = self.rules.get(&key) {
            return Ok(Arc::clone(rule.value()));
        }

        debug!(family = %family.tag(), size, "quadrature cache miss");
        let rule = Arc::new(family.nodes_and_weights(size)?);
        if let Some(limit) = self.limit {
            if self.rules.len() >= limit {
                debug!(limit, "quadrature cache full, flushing");
                self.rules.clear();
            }
        }
        let entry = self.rules.entry(key).or_insert(rule);
        Ok(Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn clear(&self) {
        self.rules.clear();
    }
}
