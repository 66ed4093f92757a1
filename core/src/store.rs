// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, PoisonError, RwLock};

use icsweek_ical::EventRecord;

/// Holds the sorted events of the most recent parse.
///
/// Each parse produces a new immutable snapshot which is swapped in whole;
/// readers keep whatever snapshot they already hold.
#[derive(Debug)]
pub struct EventStore {
    events: RwLock<Arc<[EventRecord]>>,
}

impl EventStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<[EventRecord]> {
        let guard = self.events.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the snapshot with a new, already sorted, collection.
    pub fn replace(&self, events: Vec<EventRecord>) {
        let events: Arc<[EventRecord]> = events.into();
        let mut guard = self.events.write().unwrap_or_else(PoisonError::into_inner);
        *guard = events;
    }

    /// Number of events in the current snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the current snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
