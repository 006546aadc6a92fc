// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The opaque callable capability registered with event targets.

use alloc::rc::Rc;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Event;

/// A shared event callback, compared and hashed by reference identity.
///
/// Cloning a `Handler` produces a second reference to the same callback:
/// clones compare equal and hash identically, while two handlers built by
/// separate [`Handler::new`] calls are always distinct, even when their
/// closures are textually identical. Identity is what subscription
/// registries key on, so the handler value used to subscribe is the one a
/// caller must keep around to unsubscribe.
///
/// ```
/// use thicket_event::{Event, Handler};
///
/// let a = Handler::new(|_event: &Event| {});
/// let b = a.clone();
/// let c = Handler::new(|_event: &Event| {});
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn(&Event)>);

impl Handler {
    /// Wraps a callback in a shareable, identity-keyed handler.
    pub fn new(callback: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invokes the callback with the given event.
    pub fn call(&self, event: &Event) {
        (self.0)(event);
    }

    /// The identity key: the address of the shared allocation.
    fn addr(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>().addr()
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Handler {}

impl Hash for Handler {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler")
            .field(&format_args!("{:#x}", self.addr()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventInit;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn clones_share_identity() {
        let handler = Handler::new(|_event: &Event| {});
        let clone = handler.clone();
        assert_eq!(handler, clone);
    }

    #[test]
    fn separate_constructions_are_distinct() {
        let a = Handler::new(|_event: &Event| {});
        let b = Handler::new(|_event: &Event| {});
        assert_ne!(a, b);
    }

    #[test]
    fn identity_survives_hash_map_round_trip() {
        let mut map = hashbrown::HashMap::new();
        let a = Handler::new(|_event: &Event| {});
        let b = Handler::new(|_event: &Event| {});
        map.insert(a.clone(), 1_u32);
        map.insert(b.clone(), 2_u32);

        assert_eq!(map.get(&a.clone()), Some(&1));
        assert_eq!(map.get(&b), Some(&2));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn call_forwards_the_event() {
        let names: Rc<Cell<usize>> = Rc::new(Cell::new(0));
        let handler = Handler::new({
            let names = names.clone();
            move |event: &Event| {
                if event.name() == "ping" {
                    names.set(names.get() + 1);
                }
            }
        });

        handler.call(&Event::custom("ping", EventInit::default()));
        handler.call(&Event::custom("pong", EventInit::default()));
        assert_eq!(names.get(), 1);
    }

    #[test]
    fn identical_zero_sized_closures_are_still_distinct() {
        // Rc always gives each allocation its own reference-count block, so
        // even zero-sized closures get unique identities.
        let handlers: Vec<Handler> = (0..4).map(|_| Handler::new(|_event: &Event| {})).collect();
        for (i, a) in handlers.iter().enumerate() {
            for (j, b) in handlers.iter().enumerate() {
                assert_eq!(a == b, i == j);
            }
        }
    }
}
