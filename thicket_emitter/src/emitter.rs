// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The emitter façade: subscription, teardown, and typed dispatch.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::cell::RefCell;
use core::fmt;

use hashbrown::HashMap;
use thicket_event::{
    Event, EventInit, FocusInit, Handler, KeyboardInit, MouseInit, PointerInit, TouchInit, UiInit,
    WheelInit,
};
use thicket_target::{EventTarget, ListenerOptions};

use crate::gesture::{self, Gesture};
use crate::registry::ListenerTable;
use crate::scope::EventScope;

/// A single subscription surface over one event target.
///
/// Every call routes by name: recognized gesture names go to the synthesis
/// layer, everything else passes through to the native listener contract of
/// the bound node — including names never seen before, which is deliberate:
/// arbitrary native events stay usable without prior registration.
///
/// Cloning an emitter produces a second handle to the same instance.
/// Registrations live until removed; dropping every handle without calling
/// [`off_all`](Self::off_all) leaks whatever native listener registrations
/// were still live on the node and the scope's document root.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use thicket_emitter::{EventScope, NodeEmitter, PointerSupport, names};
/// use thicket_event::{Handler, TouchInit};
/// use thicket_target::{ListenerOptions, MemoryTarget};
///
/// let document = Rc::new(MemoryTarget::new());
/// let scope = Rc::new(EventScope::new(document, PointerSupport::PointerEvents));
/// let node = Rc::new(MemoryTarget::new());
/// let emitter = NodeEmitter::new(node, scope);
///
/// let taps = Rc::new(Cell::new(0));
/// let handler = Handler::new({
///     let taps = taps.clone();
///     move |_event| taps.set(taps.get() + 1)
/// });
///
/// emitter.on(names::TAP, &handler, ListenerOptions::default());
/// emitter.emit_touch("touchstart", TouchInit::default());
/// emitter.emit_touch("touchend", TouchInit::default());
/// assert_eq!(taps.get(), 1);
///
/// emitter.off(names::TAP, &handler);
/// ```
#[derive(Clone)]
pub struct NodeEmitter {
    inner: Rc<EmitterInner>,
}

struct EmitterInner {
    node: Rc<dyn EventTarget>,
    scope: Rc<EventScope>,
    listeners: RefCell<ListenerTable>,
    /// Gesture pairs attached through this emitter, for the bulk teardown
    /// sweeps.
    attached: RefCell<HashMap<Gesture, Vec<Handler>>>,
}

impl NodeEmitter {
    /// Binds an emitter to `node` within `scope`.
    pub fn new(node: Rc<dyn EventTarget>, scope: Rc<EventScope>) -> Self {
        Self {
            inner: Rc::new(EmitterInner {
                node,
                scope,
                listeners: RefCell::new(ListenerTable::default()),
                attached: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// The bound node.
    #[must_use]
    pub fn node(&self) -> &Rc<dyn EventTarget> {
        &self.inner.node
    }

    /// The scope this emitter shares gesture state through.
    #[must_use]
    pub fn scope(&self) -> &Rc<EventScope> {
        &self.inner.scope
    }

    /// Subscribes `handler` under `name`.
    ///
    /// Gesture names attach their synthesized sub-handlers, idempotently
    /// per `(name, handler)` pair. Any other name registers directly with
    /// the node, whose own contract absorbs duplicate registrations.
    pub fn on(&self, name: &str, handler: &Handler, options: ListenerOptions) {
        if let Some(gesture) = Gesture::from_name(name) {
            gesture::attach(gesture, self, handler, options);
        } else {
            self.inner.listeners.borrow_mut().add(name, handler);
            self.inner.node.add_event_listener(name, handler, options);
        }
    }

    /// Removes the subscription of `handler` under `name`.
    ///
    /// Removing a pair that was never registered is a no-op.
    pub fn off(&self, name: &str, handler: &Handler) {
        if let Some(gesture) = Gesture::from_name(name) {
            gesture::detach(gesture, self, handler);
        } else if self.inner.listeners.borrow_mut().remove(name, handler) {
            self.inner.node.remove_event_listener(name, handler);
        }
    }

    /// Removes every subscription under `name`, gesture or native.
    pub fn off_named(&self, name: &str) {
        if let Some(gesture) = Gesture::from_name(name) {
            for handler in self.attached_snapshot(gesture) {
                gesture::detach(gesture, self, &handler);
            }
        } else {
            let removed = self.inner.listeners.borrow_mut().take_named(name);
            for handler in removed {
                self.inner.node.remove_event_listener(name, &handler);
            }
        }
    }

    /// Removes every subscription made through this emitter.
    ///
    /// Gesture registrations are torn down pair by pair first — which also
    /// unregisters their native sub-handlers through the regular paths —
    /// then any remaining native registrations are swept name by name.
    pub fn off_all(&self) {
        let attached: Vec<(Gesture, Handler)> = {
            let attached = self.inner.attached.borrow();
            attached
                .iter()
                .flat_map(|(gesture, handlers)| {
                    handlers.iter().map(move |handler| (*gesture, handler.clone()))
                })
                .collect()
        };
        for (gesture, handler) in attached {
            gesture::detach(gesture, self, &handler);
        }

        let names = self.inner.listeners.borrow().names();
        for name in names {
            self.off_named(&name);
        }
    }

    /// Subscribes `handler` to fire at most once for `name`.
    ///
    /// The internal wrapper deregisters itself before invoking `handler`,
    /// so a handler that re-subscribes during its own invocation starts a
    /// fresh registration rather than extending the old one. The wrapper
    /// holds only a weak reference back to this emitter.
    pub fn once(&self, name: &str, handler: &Handler, options: ListenerOptions) {
        let slot: Rc<RefCell<Option<Handler>>> = Rc::new(RefCell::new(None));
        let wrapper = Handler::new({
            let slot = slot.clone();
            let emitter = Rc::downgrade(&self.inner);
            let name = String::from(name);
            let user = handler.clone();
            move |event| {
                let me = slot.borrow().clone();
                if let (Some(inner), Some(me)) = (emitter.upgrade(), me) {
                    Self { inner }.off(&name, &me);
                }
                user.call(event);
            }
        });
        *slot.borrow_mut() = Some(wrapper.clone());
        self.on(name, &wrapper, options);
    }

    /// Dispatches a payload-free custom event under `name`.
    pub fn emit(&self, name: &str, init: EventInit) {
        self.dispatch(Event::custom(name, init));
    }

    /// Dispatches a custom event carrying `detail` under `name`.
    pub fn emit_with<D: Any>(&self, name: &str, detail: D, init: EventInit) {
        self.dispatch(Event::custom_with(name, detail, init));
    }

    /// Dispatches a UI event (load, resize, scroll, select, …).
    pub fn emit_ui(&self, name: &str, init: UiInit) {
        self.dispatch(Event::ui(name, init));
    }

    /// Dispatches a mouse event (click, mousedown, mousemove, …).
    pub fn emit_mouse(&self, name: &str, init: MouseInit) {
        self.dispatch(Event::mouse(name, init));
    }

    /// Dispatches a keyboard event (keydown, keyup, …).
    pub fn emit_keyboard(&self, name: &str, init: KeyboardInit) {
        self.dispatch(Event::keyboard(name, init));
    }

    /// Dispatches a wheel event.
    pub fn emit_wheel(&self, name: &str, init: WheelInit) {
        self.dispatch(Event::wheel(name, init));
    }

    /// Dispatches a focus transition event (focus, blur, focusin,
    /// focusout).
    pub fn emit_focus(&self, name: &str, init: FocusInit) {
        self.dispatch(Event::focus(name, init));
    }

    /// Dispatches a touch event (touchstart, touchend, touchmove, …).
    pub fn emit_touch(&self, name: &str, init: TouchInit) {
        self.dispatch(Event::touch(name, init));
    }

    /// Dispatches a pointer event (pointerdown, pointerup, pointermove,
    /// …).
    pub fn emit_pointer(&self, name: &str, init: PointerInit) {
        self.dispatch(Event::pointer(name, init));
    }

    /// Routes a built event: gesture names replay the native primitives
    /// they are synthesized from; anything else — unrecognized names
    /// included — dispatches natively.
    fn dispatch(&self, event: Event) {
        match Gesture::from_name(event.name()) {
            Some(gesture) => gesture::replay(gesture, self, &event),
            None => self.inner.node.dispatch_event(&event),
        }
    }

    pub(crate) fn note_attached(&self, gesture: Gesture, handler: &Handler) {
        let mut attached = self.inner.attached.borrow_mut();
        let handlers = attached.entry(gesture).or_default();
        if !handlers.contains(handler) {
            handlers.push(handler.clone());
        }
    }

    pub(crate) fn forget_attached(&self, gesture: Gesture, handler: &Handler) {
        let mut attached = self.inner.attached.borrow_mut();
        if let Some(handlers) = attached.get_mut(&gesture) {
            handlers.retain(|h| h != handler);
            if handlers.is_empty() {
                attached.remove(&gesture);
            }
        }
    }

    fn attached_snapshot(&self, gesture: Gesture) -> Vec<Handler> {
        self.inner
            .attached
            .borrow()
            .get(&gesture)
            .cloned()
            .unwrap_or_default()
    }
}

impl fmt::Debug for NodeEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attached: usize = self.inner.attached.borrow().values().map(Vec::len).sum();
        f.debug_struct("NodeEmitter")
            .field("listeners", &self.inner.listeners.borrow().len())
            .field("attached", &attached)
            .finish_non_exhaustive()
    }
}
