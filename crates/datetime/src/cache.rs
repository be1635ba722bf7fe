//! Bounded cache of shared date formatters.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use chrono_tz::Tz;
use tracing::debug;

use crate::context::{CalendarKind, Locale};
use crate::fmt::DateFormatter;

/// Number of formatters the global cache retains.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

static GLOBAL: LazyLock<FormatterCache> = LazyLock::new(FormatterCache::new);

/// Identity of a cached formatter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    pattern: String,
    time_zone: Tz,
    locale: Locale,
    kind: CalendarKind,
}

impl CacheKey {
    fn of(formatter: &DateFormatter) -> Self {
        Self {
            pattern: formatter.pattern().to_string(),
            time_zone: formatter.time_zone(),
            locale: formatter.locale().clone(),
            kind: formatter.kind(),
        }
    }
}

/// A bounded, thread-safe pool of reusable [`DateFormatter`]s.
///
/// Formatter construction translates its pattern, so recurring
/// (pattern, zone, locale, calendar) combinations are built once and
/// shared as `Arc<DateFormatter>`. The pool never grows past its capacity:
/// storing a new combination in a full pool first drops one resident
/// entry, chosen arbitrarily rather than least-recently-used.
///
/// All access serializes through an internal mutex. The string-parsing
/// constructors and formatting methods of
/// [`DateTime`](crate::DateTime) go through the process-wide instance
/// returned by [`FormatterCache::global`].
#[derive(Debug)]
pub struct FormatterCache {
    entries: Mutex<HashMap<CacheKey, Arc<DateFormatter>>>,
    capacity: usize,
}

impl FormatterCache {
    /// Creates a cache with [`DEFAULT_CACHE_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` formatters.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// The process-wide cache.
    pub fn global() -> &'static FormatterCache {
        &GLOBAL
    }

    /// Returns the formatter for the given combination, building and
    /// caching it on first use.
    pub fn formatter_for(
        &self,
        pattern: &str,
        time_zone: Tz,
        locale: &Locale,
        kind: CalendarKind,
    ) -> Arc<DateFormatter> {
        let key = CacheKey {
            pattern: pattern.to_string(),
            time_zone,
            locale: locale.clone(),
            kind,
        };
        let mut entries = self.lock();
        if let Some(found) = entries.get(&key) {
            return Arc::clone(found);
        }
        let formatter = Arc::new(DateFormatter::new(pattern, time_zone, locale.clone(), kind));
        self.store(&mut entries, key, Arc::clone(&formatter));
        formatter
    }

    /// Stores a caller-built formatter, replacing any entry with the same
    /// identity, and returns the shared handle.
    ///
    /// A replacement is not a new combination and therefore never evicts.
    pub fn insert(&self, formatter: DateFormatter) -> Arc<DateFormatter> {
        let key = CacheKey::of(&formatter);
        let shared = Arc::new(formatter);
        let mut entries = self.lock();
        if let Some(slot) = entries.get_mut(&key) {
            *slot = Arc::clone(&shared);
        } else {
            self.store(&mut entries, key, Arc::clone(&shared));
        }
        shared
    }

    /// Returns the number of resident formatters.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when no formatters are resident.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the maximum number of resident formatters.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Arc<DateFormatter>>> {
        // Every path leaves the map consistent, poisoned or not.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn store(
        &self,
        entries: &mut HashMap<CacheKey, Arc<DateFormatter>>,
        key: CacheKey,
        formatter: Arc<DateFormatter>,
    ) {
        if entries.len() >= self.capacity {
            // Victim choice is whatever the map yields first.
            if let Some(victim) = entries.keys().next().cloned() {
                debug!(pattern = %victim.pattern, zone = %victim.time_zone, "evicting cached formatter");
                entries.remove(&victim);
            }
        }
        entries.insert(key, formatter);
    }
}

impl Default for FormatterCache {
    fn default() -> Self {
        Self::new()
    }
}
