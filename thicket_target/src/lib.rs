// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_target --heading-base-level=0

//! Thicket Target: the event-target collaborator contract.
//!
//! [`EventTarget`] is the capability an emitter binds to: native listener
//! registration, removal, and synchronous dispatch — the three operations a
//! DOM node exposes. The emitter layer treats a target as fully opaque; any
//! object honoring this contract can stand behind an emitter, whether it
//! wraps a real platform node or lives entirely in memory.
//!
//! [`MemoryTarget`] is the in-memory reference implementation the workspace
//! tests against. It doubles as the document-level root that gesture
//! cancellation listeners bind to.
//!
//! ## Contract
//!
//! Implementations must uphold the pieces of the native contract the
//! emitter layer builds on:
//!
//! - `add_event_listener` silently ignores an exact duplicate
//!   `(name, handler, options)` registration;
//! - `remove_event_listener` of an unregistered pair is a no-op;
//! - `dispatch_event` runs synchronously and tolerates handlers that
//!   re-enter the target: listeners added during dispatch do not see the
//!   in-flight event, and listeners removed before their turn are skipped.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use std::cell::Cell;
//! use thicket_event::{Event, EventInit, Handler};
//! use thicket_target::{EventTarget, ListenerOptions, MemoryTarget};
//!
//! let target = MemoryTarget::new();
//! let count = Rc::new(Cell::new(0));
//! let handler = Handler::new({
//!     let count = count.clone();
//!     move |_event| count.set(count.get() + 1)
//! });
//!
//! target.add_event_listener("ready", &handler, ListenerOptions::default());
//! target.dispatch_event(&Event::custom("ready", EventInit::default()));
//! assert_eq!(count.get(), 1);
//!
//! target.remove_event_listener("ready", &handler);
//! target.dispatch_event(&Event::custom("ready", EventInit::default()));
//! assert_eq!(count.get(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod memory;

pub use memory::MemoryTarget;

use thicket_event::{Event, Handler};

/// Options attached to a native listener registration.
///
/// Mirrors the web `AddEventListenerOptions` dictionary, minus the abort
/// signal: this model has no deferred work to cancel. The boolean capture
/// shorthand the web API accepts maps through [`From<bool>`].
///
/// `once` is honored by the target itself: the registration is removed
/// immediately before its first invocation. A layer that tracks the
/// registration separately (an emitter's own table) keeps its bookkeeping
/// entry until an explicit removal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    /// Deliver during the capture phase.
    pub capture: bool,
    /// Remove the registration after its first invocation.
    pub once: bool,
    /// The handler promises not to cancel the event.
    pub passive: bool,
}

impl ListenerOptions {
    /// Options with only `capture` set.
    #[must_use]
    pub fn capturing() -> Self {
        Self {
            capture: true,
            ..Self::default()
        }
    }
}

impl From<bool> for ListenerOptions {
    fn from(capture: bool) -> Self {
        Self {
            capture,
            ..Self::default()
        }
    }
}

/// A DOM-like event target: the external node an emitter is bound to.
///
/// See the [crate docs](crate) for the duplicate-registration and
/// reentrancy obligations implementations take on.
pub trait EventTarget {
    /// Registers `handler` for events dispatched under `name`.
    fn add_event_listener(&self, name: &str, handler: &Handler, options: ListenerOptions);

    /// Removes every registration of `(name, handler)`.
    fn remove_event_listener(&self, name: &str, handler: &Handler);

    /// Synchronously delivers `event` to listeners registered under its
    /// name.
    fn dispatch_event(&self, event: &Event);
}
