// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-emitter handler registry.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use thicket_event::Handler;

/// Mapping from event name to the handlers registered under it.
///
/// Pure bookkeeping: the emitter pairs every mutation here with exactly one
/// native listener call on its node. Membership is keyed by handler
/// identity; insertion order is preserved per name. All operations are
/// total over possibly-empty state.
#[derive(Debug, Default)]
pub(crate) struct ListenerTable {
    by_name: HashMap<String, Vec<Handler>>,
}

impl ListenerTable {
    /// Inserts `handler` under `name`. Returns `false` if it was already
    /// present.
    pub(crate) fn add(&mut self, name: &str, handler: &Handler) -> bool {
        let handlers = self.by_name.entry(String::from(name)).or_default();
        if handlers.contains(handler) {
            return false;
        }
        handlers.push(handler.clone());
        true
    }

    /// Removes `handler` from `name`. Returns `false` if it was absent.
    pub(crate) fn remove(&mut self, name: &str, handler: &Handler) -> bool {
        let Some(handlers) = self.by_name.get_mut(name) else {
            return false;
        };
        let Some(index) = handlers.iter().position(|h| h == handler) else {
            return false;
        };
        handlers.remove(index);
        if handlers.is_empty() {
            self.by_name.remove(name);
        }
        true
    }

    /// Removes and returns every handler tracked under `name`.
    pub(crate) fn take_named(&mut self, name: &str) -> Vec<Handler> {
        self.by_name.remove(name).unwrap_or_default()
    }

    /// A snapshot of every tracked name.
    pub(crate) fn names(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    /// Whether `(name, handler)` is tracked.
    #[cfg(test)]
    pub(crate) fn contains(&self, name: &str, handler: &Handler) -> bool {
        self.by_name
            .get(name)
            .is_some_and(|handlers| handlers.contains(handler))
    }

    /// Total number of tracked registrations.
    pub(crate) fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thicket_event::Event;

    fn handler() -> Handler {
        Handler::new(|_event: &Event| {})
    }

    #[test]
    fn add_is_keyed_by_identity() {
        let mut table = ListenerTable::default();
        let h = handler();

        assert!(table.add("ready", &h));
        assert!(!table.add("ready", &h.clone()));
        assert!(table.add("ready", &handler()));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn remove_is_total() {
        let mut table = ListenerTable::default();
        let h = handler();

        assert!(!table.remove("ready", &h));
        table.add("ready", &h);
        assert!(table.remove("ready", &h));
        assert!(!table.remove("ready", &h));
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn take_named_drains_one_name_only() {
        let mut table = ListenerTable::default();
        let a = handler();
        let b = handler();
        let c = handler();
        table.add("ready", &a);
        table.add("ready", &b);
        table.add("other", &c);

        let drained = table.take_named("ready");
        assert_eq!(drained.len(), 2);
        assert!(drained.contains(&a));
        assert!(drained.contains(&b));
        assert!(table.contains("other", &c));
        assert!(table.take_named("ready").is_empty());
    }

    #[test]
    fn names_snapshot_reflects_live_names() {
        let mut table = ListenerTable::default();
        let h = handler();
        table.add("one", &h);
        table.add("two", &h);

        let mut names = table.names();
        names.sort();
        assert_eq!(names, ["one", "two"]);

        table.remove("one", &h);
        assert_eq!(table.names(), ["two"]);
    }
}
