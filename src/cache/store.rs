// In-memory menu cache.
// Holds the last built menu model and decides when it has gone stale.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::github::MenuModel;

use super::clock::{Clock, SystemClock};

/// How long a fetched menu is reused before the API is asked again.
pub const STALENESS_WINDOW: Duration = Duration::from_secs(15 * 60);

/// A menu model and the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub model: Arc<MenuModel>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Check if this entry is younger than `max_age`.
    /// Entries stamped in the future count as stale.
    pub fn is_fresh(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now.signed_duration_since(self.fetched_at)
            .to_std()
            .map(|age| age < max_age)
            .unwrap_or(false)
    }
}

/// Single-entry cache for the gist menu.
#[derive(Debug)]
pub struct MenuCache<C = SystemClock> {
    entry: Option<CacheEntry>,
    clock: C,
}

impl MenuCache<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MenuCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MenuCache<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { entry: None, clock }
    }

    /// The cached model, if one exists and is younger than `max_age`.
    pub fn get_if_fresh(&self, max_age: Duration) -> Option<Arc<MenuModel>> {
        let now = self.clock.now();
        self.entry
            .as_ref()
            .filter(|entry| entry.is_fresh(now, max_age))
            .map(|entry| Arc::clone(&entry.model))
    }

    /// Replace the cached entry, stamping it with the current time.
    pub fn store(&mut self, model: MenuModel) -> Arc<MenuModel> {
        let model = Arc::new(model);
        self.entry = Some(CacheEntry {
            model: Arc::clone(&model),
            fetched_at: self.clock.now(),
        });
        model
    }

    /// Drop the cached entry so the next request refetches.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// When the current entry was stored.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|entry| entry.fetched_at)
    }
}
