// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory reference target.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use thicket_event::{Event, Handler};

use crate::{EventTarget, ListenerOptions};

/// One live `(name, handler, options)` registration.
#[derive(Clone, Debug)]
struct Registration {
    name: String,
    handler: Handler,
    options: ListenerOptions,
}

impl Registration {
    fn matches(&self, name: &str, handler: &Handler) -> bool {
        self.name == name && self.handler == *handler
    }

    fn same(&self, other: &Self) -> bool {
        self.matches(&other.name, &other.handler) && self.options == other.options
    }
}

/// An in-memory [`EventTarget`] with synchronous dispatch.
///
/// Listeners fire in registration order. Dispatch walks a snapshot of the
/// listener list and re-checks each entry against the live list before
/// invoking it, so handlers may freely add and remove listeners mid-flight:
/// additions do not see the in-flight event, and removals are skipped.
///
/// The introspection accessors ([`listener_count`](Self::listener_count)
/// and friends) exist so tests can assert that teardown paths leave no
/// registration behind.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    registrations: RefCell<Vec<Registration>>,
}

impl MemoryTarget {
    /// Creates an empty target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of live registrations.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registrations.borrow().len()
    }

    /// Number of live registrations under `name`.
    #[must_use]
    pub fn listeners_for(&self, name: &str) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|r| r.name == name)
            .count()
    }

    /// Whether `(name, handler)` is currently registered.
    #[must_use]
    pub fn has_listener(&self, name: &str, handler: &Handler) -> bool {
        self.registrations
            .borrow()
            .iter()
            .any(|r| r.matches(name, handler))
    }

    fn is_live(&self, registration: &Registration) -> bool {
        self.registrations
            .borrow()
            .iter()
            .any(|r| r.same(registration))
    }

    fn drop_registration(&self, registration: &Registration) {
        self.registrations
            .borrow_mut()
            .retain(|r| !r.same(registration));
    }
}

impl EventTarget for MemoryTarget {
    fn add_event_listener(&self, name: &str, handler: &Handler, options: ListenerOptions) {
        let mut registrations = self.registrations.borrow_mut();
        let duplicate = registrations
            .iter()
            .any(|r| r.matches(name, handler) && r.options == options);
        if !duplicate {
            registrations.push(Registration {
                name: String::from(name),
                handler: handler.clone(),
                options,
            });
        }
    }

    fn remove_event_listener(&self, name: &str, handler: &Handler) {
        self.registrations
            .borrow_mut()
            .retain(|r| !r.matches(name, handler));
    }

    fn dispatch_event(&self, event: &Event) {
        let snapshot: Vec<Registration> = self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.name == event.name())
            .cloned()
            .collect();

        for registration in snapshot {
            // A handler earlier in this dispatch may have removed this one.
            if !self.is_live(&registration) {
                continue;
            }
            // `once` registrations come off the list before they run, so a
            // reentrant dispatch from inside the handler cannot re-enter it.
            if registration.options.once {
                self.drop_registration(&registration);
            }
            registration.handler.call(event);
        }
    }
}
