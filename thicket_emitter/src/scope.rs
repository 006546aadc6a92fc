// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared emitter scope: document root, pointer capability, gesture
//! registry.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use thicket_event::Handler;
use thicket_target::EventTarget;

use crate::gesture::{DedupState, Gesture, GestureMap, TapState};

/// Which native primitive backs the mouse half of unified pointer gestures.
///
/// Resolved once when the scope is built, the way a browser environment is
/// probed for pointer-event support once at startup, so the gesture
/// algorithms are pure functions of the event stream and this flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerSupport {
    /// The environment delivers `pointerdown`/`pointerup`/`pointermove`.
    #[default]
    PointerEvents,
    /// Legacy environment: fall back to
    /// `mousedown`/`mouseup`/`mousemove`.
    MouseEvents,
}

/// State shared by every emitter in one logical environment.
///
/// A scope plays the role the global `document` and module state play in a
/// browser: it owns the registry of synthesized gesture registrations, the
/// document-level root that tap cancellation listens on, and the pointer
/// capability. Construct one per process — or one per test, which is the
/// point of it being a value instead of a global.
///
/// The gesture registry is shared across every emitter built over the same
/// scope, but each entry is only ever mutated through the emitter that
/// created it. That is a documented discipline, not a hard barrier: the
/// registry itself does not record owners.
pub struct EventScope {
    document: Rc<dyn EventTarget>,
    pointer_support: PointerSupport,
    gestures: RefCell<GestureMap>,
}

impl EventScope {
    /// Creates a scope over the given document-level root.
    pub fn new(document: Rc<dyn EventTarget>, pointer_support: PointerSupport) -> Self {
        Self {
            document,
            pointer_support,
            gestures: RefCell::new(GestureMap::default()),
        }
    }

    /// The document-level root shared by all emitters in this scope.
    #[must_use]
    pub fn document(&self) -> &Rc<dyn EventTarget> {
        &self.document
    }

    /// The pointer capability this scope was built with.
    #[must_use]
    pub fn pointer_support(&self) -> PointerSupport {
        self.pointer_support
    }

    /// Whether `(gesture, handler)` currently has a synthesized
    /// registration.
    #[must_use]
    pub fn is_attached(&self, gesture: Gesture, handler: &Handler) -> bool {
        self.gestures.borrow().contains(gesture, handler)
    }

    /// Total number of live gesture registrations, across every emitter
    /// sharing this scope.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.gestures.borrow().len()
    }

    /// The suppression record of a live unified-pointer or pointer-tap
    /// registration.
    #[must_use]
    pub fn dedup_state(&self, gesture: Gesture, handler: &Handler) -> Option<Rc<DedupState>> {
        self.gestures.borrow().dedup_state(gesture, handler)
    }

    /// The recognition record of a live tap registration.
    #[must_use]
    pub fn tap_state(&self, handler: &Handler) -> Option<Rc<TapState>> {
        self.gestures.borrow().tap_state(handler)
    }

    pub(crate) fn gestures(&self) -> &RefCell<GestureMap> {
        &self.gestures
    }
}

impl fmt::Debug for EventScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventScope")
            .field("pointer_support", &self.pointer_support)
            .field("attached_count", &self.attached_count())
            .finish_non_exhaustive()
    }
}
