// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic composite gestures over raw touch, mouse, and pointer events.
//!
//! Touch-capable environments follow a physical touch with a synthesized
//! mouse-family event for the same gesture. The sub-handlers built here
//! suppress that duplicate without suppressing genuine mouse-only input,
//! recognize taps (press and release with nothing in between), and compose
//! tap with native `click`.
//!
//! Each attach synthesizes sub-handlers private to one
//! `(gesture, user handler)` pair and records them in the scope's shared
//! registry; detach re-derives everything to remove from that record alone.
//! Attach of an already-registered pair and detach of an unregistered pair
//! are both no-ops.

use alloc::rc::Rc;
use core::cell::Cell;

use hashbrown::HashMap;
use thicket_event::{Event, Handler, TouchInit};
use thicket_target::{EventTarget, ListenerOptions};

use crate::emitter::NodeEmitter;
use crate::names;
use crate::scope::PointerSupport;

const TOUCH_START: &str = "touchstart";
const TOUCH_END: &str = "touchend";
const TOUCH_MOVE: &str = "touchmove";
const TOUCH_LEAVE: &str = "touchleave";
const TOUCH_CANCEL: &str = "touchcancel";

/// Document-level events that abort an in-progress tap.
const TAP_CANCEL_EVENTS: [&str; 3] = [TOUCH_MOVE, TOUCH_LEAVE, TOUCH_CANCEL];

/// A synthesized composite gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Unified press: `touchstart` deduplicated with
    /// `pointerdown`/`mousedown`.
    PointerDown,
    /// Unified release: `touchend` deduplicated with
    /// `pointerup`/`mouseup`.
    PointerUp,
    /// Unified motion: `touchmove` deduplicated with
    /// `pointermove`/`mousemove`.
    PointerMove,
    /// Touch-only tap: press and release with no intervening move, leave,
    /// or cancel.
    Tap,
    /// Tap unified with native `click`.
    PointerTap,
}

impl Gesture {
    /// Maps a subscription name to the gesture it designates, if any.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            names::POINTER_DOWN => Some(Self::PointerDown),
            names::POINTER_UP => Some(Self::PointerUp),
            names::POINTER_MOVE => Some(Self::PointerMove),
            names::TAP => Some(Self::Tap),
            names::POINTER_TAP => Some(Self::PointerTap),
            _ => None,
        }
    }

    /// The subscription name this gesture is registered under.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PointerDown => names::POINTER_DOWN,
            Self::PointerUp => names::POINTER_UP,
            Self::PointerMove => names::POINTER_MOVE,
            Self::Tap => names::TAP,
            Self::PointerTap => names::POINTER_TAP,
        }
    }

    /// The native triple behind a unified pointer gesture.
    fn unified(self) -> Option<UnifiedNames> {
        match self {
            Self::PointerDown => Some(UnifiedNames {
                pointer: "pointerdown",
                touch: TOUCH_START,
                mouse: "mousedown",
            }),
            Self::PointerUp => Some(UnifiedNames {
                pointer: "pointerup",
                touch: TOUCH_END,
                mouse: "mouseup",
            }),
            Self::PointerMove => Some(UnifiedNames {
                pointer: "pointermove",
                touch: TOUCH_MOVE,
                mouse: "mousemove",
            }),
            Self::Tap | Self::PointerTap => None,
        }
    }
}

/// The raw event names a unified pointer gesture is stitched from.
#[derive(Clone, Copy, Debug)]
struct UnifiedNames {
    pointer: &'static str,
    touch: &'static str,
    mouse: &'static str,
}

impl UnifiedNames {
    /// The non-touch primitive for the given capability.
    fn mouse_side(self, support: PointerSupport) -> &'static str {
        match support {
            PointerSupport::PointerEvents => self.pointer,
            PointerSupport::MouseEvents => self.mouse,
        }
    }
}

/// Touch/mouse suppression state for one gesture registration.
///
/// The touch half of a gesture marks the flag; the synthesized mouse-family
/// event that follows takes it and stays quiet. A genuine mouse event finds
/// the flag clear and passes through.
#[derive(Debug, Default)]
pub struct DedupState {
    saw_touch: Cell<bool>,
}

impl DedupState {
    /// Records that the touch half of the gesture fired.
    pub fn mark_touch(&self) {
        self.saw_touch.set(true);
    }

    /// Clears the flag, returning `true` when a touch fired since the last
    /// take.
    pub fn take_touch(&self) -> bool {
        self.saw_touch.replace(false)
    }

    /// Reads the flag without clearing it.
    #[must_use]
    pub fn is_touch(&self) -> bool {
        self.saw_touch.get()
    }
}

/// Tap recognition state for one gesture registration.
///
/// Armed on `touchstart`, disarmed by any document-level move, leave, or
/// cancel. `touchend` fires the user handler only while armed. Release
/// itself does not disarm; only cancellation does.
#[derive(Debug, Default)]
pub struct TapState {
    armed: Cell<bool>,
}

impl TapState {
    /// Arms tap recognition: a touch contact began.
    pub fn arm(&self) {
        self.armed.set(true);
    }

    /// Disarms tap recognition: the contact moved, left, or was
    /// interrupted.
    pub fn disarm(&self) {
        self.armed.set(false);
    }

    /// Whether a release right now would count as a tap.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

/// The sub-handlers and state owned by one `(gesture, handler)`
/// registration. Sub-handlers are never exposed to callers; detach
/// re-derives them from here.
#[derive(Debug)]
enum GestureEntry {
    /// Touch/mouse pair for a unified pointer gesture.
    Unified {
        names: UnifiedNames,
        touch: Handler,
        mouse: Handler,
        state: Rc<DedupState>,
    },
    /// Start/end pair plus the document-level cancel listener for tap.
    Tap {
        start: Handler,
        end: Handler,
        cancel: Handler,
        state: Rc<TapState>,
    },
    /// The tap-backed touch half and the native `click` half of
    /// pointer-tap.
    PointerTap {
        touch: Handler,
        mouse: Handler,
        state: Rc<DedupState>,
    },
}

/// The shared registry of synthesized registrations, keyed by gesture and
/// user-handler identity.
#[derive(Debug, Default)]
pub(crate) struct GestureMap {
    entries: HashMap<Gesture, HashMap<Handler, GestureEntry>>,
}

impl GestureMap {
    pub(crate) fn contains(&self, gesture: Gesture, handler: &Handler) -> bool {
        self.entries
            .get(&gesture)
            .is_some_and(|m| m.contains_key(handler))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub(crate) fn dedup_state(&self, gesture: Gesture, handler: &Handler) -> Option<Rc<DedupState>> {
        match self.entries.get(&gesture)?.get(handler)? {
            GestureEntry::Unified { state, .. } | GestureEntry::PointerTap { state, .. } => {
                Some(state.clone())
            }
            GestureEntry::Tap { .. } => None,
        }
    }

    pub(crate) fn tap_state(&self, handler: &Handler) -> Option<Rc<TapState>> {
        match self.entries.get(&Gesture::Tap)?.get(handler)? {
            GestureEntry::Tap { state, .. } => Some(state.clone()),
            _ => None,
        }
    }

    fn insert(&mut self, gesture: Gesture, handler: &Handler, entry: GestureEntry) {
        self.entries
            .entry(gesture)
            .or_default()
            .insert(handler.clone(), entry);
    }

    fn remove(&mut self, gesture: Gesture, handler: &Handler) -> Option<GestureEntry> {
        let map = self.entries.get_mut(&gesture)?;
        let entry = map.remove(handler);
        if map.is_empty() {
            self.entries.remove(&gesture);
        }
        entry
    }
}

/// Synthesizes and registers the sub-handlers for `(gesture, handler)`.
///
/// Idempotent: a pair that already has a live registration — through any
/// emitter sharing the scope — is left untouched.
pub(crate) fn attach(
    gesture: Gesture,
    emitter: &NodeEmitter,
    handler: &Handler,
    options: ListenerOptions,
) {
    if emitter.scope().gestures().borrow().contains(gesture, handler) {
        return;
    }

    match gesture {
        Gesture::PointerDown | Gesture::PointerUp | Gesture::PointerMove => {
            attach_unified(gesture, emitter, handler, options);
        }
        Gesture::Tap => attach_tap(emitter, handler, options),
        Gesture::PointerTap => attach_pointer_tap(emitter, handler, options),
    }
}

/// Reverses exactly what [`attach`] created for `(gesture, handler)`.
/// Detaching a pair with no live registration is a no-op.
pub(crate) fn detach(gesture: Gesture, emitter: &NodeEmitter, handler: &Handler) {
    let entry = emitter
        .scope()
        .gestures()
        .borrow_mut()
        .remove(gesture, handler);
    let Some(entry) = entry else {
        return;
    };
    emitter.forget_attached(gesture, handler);

    match entry {
        GestureEntry::Unified {
            names,
            touch,
            mouse,
            ..
        } => {
            emitter.off(names.touch, &touch);
            emitter.off(names.mouse_side(emitter.scope().pointer_support()), &mouse);
        }
        GestureEntry::Tap {
            start, end, cancel, ..
        } => {
            emitter.off(TOUCH_START, &start);
            emitter.off(TOUCH_END, &end);
            let document = emitter.scope().document().clone();
            for name in TAP_CANCEL_EVENTS {
                document.remove_event_listener(name, &cancel);
            }
        }
        GestureEntry::PointerTap { touch, mouse, .. } => {
            detach(Gesture::Tap, emitter, &touch);
            emitter.off(names::CLICK, &mouse);
        }
    }
}

/// Custom dispatch for gesture names: replays the native primitives the
/// gesture is synthesized from, since no single native event corresponds to
/// the composite.
pub(crate) fn replay(gesture: Gesture, emitter: &NodeEmitter, event: &Event) {
    match gesture {
        Gesture::PointerDown | Gesture::PointerUp | Gesture::PointerMove => {
            if let Some(unified) = gesture.unified() {
                let name = unified.mouse_side(emitter.scope().pointer_support());
                emitter.node().dispatch_event(&event.with_name(name));
            }
        }
        Gesture::Tap | Gesture::PointerTap => {
            let init = TouchInit {
                event: event.init(),
                ..TouchInit::default()
            };
            emitter
                .node()
                .dispatch_event(&Event::touch(TOUCH_START, init.clone()));
            emitter.node().dispatch_event(&Event::touch(TOUCH_END, init));
        }
    }
}

fn attach_unified(
    gesture: Gesture,
    emitter: &NodeEmitter,
    handler: &Handler,
    options: ListenerOptions,
) {
    let Some(unified) = gesture.unified() else {
        return;
    };
    let state = Rc::new(DedupState::default());
    let touch = {
        let state = state.clone();
        let user = handler.clone();
        Handler::new(move |event| {
            state.mark_touch();
            user.call(event);
        })
    };
    let mouse = {
        let state = state.clone();
        let user = handler.clone();
        Handler::new(move |event| {
            if !state.take_touch() {
                user.call(event);
            }
        })
    };

    emitter.scope().gestures().borrow_mut().insert(
        gesture,
        handler,
        GestureEntry::Unified {
            names: unified,
            touch: touch.clone(),
            mouse: mouse.clone(),
            state,
        },
    );
    emitter.note_attached(gesture, handler);

    emitter.on(unified.touch, &touch, options);
    emitter.on(
        unified.mouse_side(emitter.scope().pointer_support()),
        &mouse,
        options,
    );
}

fn attach_tap(emitter: &NodeEmitter, handler: &Handler, options: ListenerOptions) {
    let state = Rc::new(TapState::default());
    let start = {
        let state = state.clone();
        Handler::new(move |_event| state.arm())
    };
    let end = {
        let state = state.clone();
        let user = handler.clone();
        Handler::new(move |event| {
            if state.is_armed() {
                user.call(event);
            }
        })
    };
    let cancel = {
        let state = state.clone();
        Handler::new(move |_event| state.disarm())
    };

    emitter.scope().gestures().borrow_mut().insert(
        Gesture::Tap,
        handler,
        GestureEntry::Tap {
            start: start.clone(),
            end: end.clone(),
            cancel: cancel.clone(),
            state,
        },
    );
    emitter.note_attached(Gesture::Tap, handler);

    emitter.on(TOUCH_START, &start, options);
    emitter.on(TOUCH_END, &end, options);
    // Cancellation listeners bind to the shared document root, outside the
    // emitter's own registry: they have no user-facing name to subscribe
    // under, and a drag that leaves the node must still abort the tap.
    let document = emitter.scope().document().clone();
    for name in TAP_CANCEL_EVENTS {
        document.add_event_listener(name, &cancel, ListenerOptions::default());
    }
}

fn attach_pointer_tap(emitter: &NodeEmitter, handler: &Handler, options: ListenerOptions) {
    let state = Rc::new(DedupState::default());
    let touch = {
        let state = state.clone();
        let user = handler.clone();
        Handler::new(move |event| {
            state.mark_touch();
            user.call(event);
        })
    };
    let mouse = {
        let state = state.clone();
        let user = handler.clone();
        Handler::new(move |event| {
            if !state.take_touch() {
                user.call(event);
            }
        })
    };

    emitter.scope().gestures().borrow_mut().insert(
        Gesture::PointerTap,
        handler,
        GestureEntry::PointerTap {
            touch: touch.clone(),
            mouse: mouse.clone(),
            state,
        },
    );
    emitter.note_attached(Gesture::PointerTap, handler);

    // The touch half is a full tap registration of its own; the mouse half
    // listens on native click and is suppressed after a touch-driven tap.
    attach(Gesture::Tap, emitter, &touch, options);
    emitter.on(names::CLICK, &mouse, options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_take_clears_the_flag() {
        let state = DedupState::default();
        assert!(!state.take_touch());

        state.mark_touch();
        assert!(state.is_touch());
        assert!(state.take_touch());
        assert!(!state.is_touch());
        assert!(!state.take_touch());
    }

    #[test]
    fn tap_release_does_not_disarm() {
        let state = TapState::default();
        assert!(!state.is_armed());

        state.arm();
        assert!(state.is_armed());
        // Reading the flag at release leaves it armed; only cancellation
        // clears it.
        assert!(state.is_armed());

        state.disarm();
        assert!(!state.is_armed());
    }

    #[test]
    fn gesture_names_round_trip() {
        for gesture in [
            Gesture::PointerDown,
            Gesture::PointerUp,
            Gesture::PointerMove,
            Gesture::Tap,
            Gesture::PointerTap,
        ] {
            assert_eq!(Gesture::from_name(gesture.name()), Some(gesture));
        }
        assert_eq!(Gesture::from_name("click"), None);
        assert_eq!(Gesture::from_name("pointertap"), None);
    }

    #[test]
    fn unified_names_follow_capability() {
        let unified = Gesture::PointerDown.unified().unwrap();
        assert_eq!(unified.touch, "touchstart");
        assert_eq!(unified.mouse_side(PointerSupport::PointerEvents), "pointerdown");
        assert_eq!(unified.mouse_side(PointerSupport::MouseEvents), "mousedown");

        assert!(Gesture::Tap.unified().is_none());
        assert!(Gesture::PointerTap.unified().is_none());
    }
}
