// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable event values.

use alloc::rc::Rc;
use alloc::string::String;
use core::any::Any;
use core::fmt;

use crate::init::{
    EventInit, FocusInit, KeyboardInit, MouseInit, PointerInit, TouchInit, UiInit, WheelInit,
};

/// Category-specific construction data carried by an [`Event`].
#[derive(Clone)]
pub enum EventKind {
    /// An application-defined event, optionally carrying a payload.
    Custom {
        /// The payload handed to dispatch, if any.
        detail: Option<Rc<dyn Any>>,
    },
    /// A UI event (load, resize, scroll, select, …).
    Ui(UiInit),
    /// A mouse button or movement event.
    Mouse(MouseInit),
    /// A keyboard event.
    Keyboard(KeyboardInit),
    /// A wheel event.
    Wheel(WheelInit),
    /// A focus transition event.
    Focus(FocusInit),
    /// A touch contact event.
    Touch(TouchInit),
    /// A unified pointer event.
    Pointer(PointerInit),
}

// Manual Debug: custom payloads are opaque `dyn Any` values.
impl fmt::Debug for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom { detail } => f
                .debug_struct("Custom")
                .field("has_detail", &detail.is_some())
                .finish(),
            Self::Ui(init) => f.debug_tuple("Ui").field(init).finish(),
            Self::Mouse(init) => f.debug_tuple("Mouse").field(init).finish(),
            Self::Keyboard(init) => f.debug_tuple("Keyboard").field(init).finish(),
            Self::Wheel(init) => f.debug_tuple("Wheel").field(init).finish(),
            Self::Focus(init) => f.debug_tuple("Focus").field(init).finish(),
            Self::Touch(init) => f.debug_tuple("Touch").field(init).finish(),
            Self::Pointer(init) => f.debug_tuple("Pointer").field(init).finish(),
        }
    }
}

/// An immutable event value: a name, common dispatch flags, and
/// category-specific construction data.
///
/// Constructing an event performs no dispatch; values are handed to a
/// target's `dispatch_event` (usually through an emitter's `emit*` family)
/// and delivered by reference to every handler registered under the name.
///
/// ```
/// use thicket_event::{Event, EventInit};
///
/// let event = Event::custom_with("selection-changed", 3_usize, EventInit::default());
/// assert_eq!(event.name(), "selection-changed");
/// assert_eq!(event.detail::<usize>(), Some(&3));
/// assert_eq!(event.detail::<bool>(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Event {
    name: String,
    init: EventInit,
    kind: EventKind,
}

impl Event {
    /// A custom event with no payload.
    pub fn custom(name: impl Into<String>, init: EventInit) -> Self {
        Self {
            name: name.into(),
            init,
            kind: EventKind::Custom { detail: None },
        }
    }

    /// A custom event carrying an arbitrary payload.
    pub fn custom_with<D: Any>(name: impl Into<String>, detail: D, init: EventInit) -> Self {
        Self {
            name: name.into(),
            init,
            kind: EventKind::Custom {
                detail: Some(Rc::new(detail)),
            },
        }
    }

    /// A UI event.
    pub fn ui(name: impl Into<String>, init: UiInit) -> Self {
        Self {
            name: name.into(),
            init: init.event,
            kind: EventKind::Ui(init),
        }
    }

    /// A mouse event.
    pub fn mouse(name: impl Into<String>, init: MouseInit) -> Self {
        Self {
            name: name.into(),
            init: init.ui.event,
            kind: EventKind::Mouse(init),
        }
    }

    /// A keyboard event.
    pub fn keyboard(name: impl Into<String>, init: KeyboardInit) -> Self {
        Self {
            name: name.into(),
            init: init.event,
            kind: EventKind::Keyboard(init),
        }
    }

    /// A wheel event.
    pub fn wheel(name: impl Into<String>, init: WheelInit) -> Self {
        Self {
            name: name.into(),
            init: init.mouse.ui.event,
            kind: EventKind::Wheel(init),
        }
    }

    /// A focus transition event.
    pub fn focus(name: impl Into<String>, init: FocusInit) -> Self {
        Self {
            name: name.into(),
            init: init.event,
            kind: EventKind::Focus(init),
        }
    }

    /// A touch contact event.
    pub fn touch(name: impl Into<String>, init: TouchInit) -> Self {
        Self {
            name: name.into(),
            init: init.event,
            kind: EventKind::Touch(init),
        }
    }

    /// A unified pointer event.
    pub fn pointer(name: impl Into<String>, init: PointerInit) -> Self {
        Self {
            name: name.into(),
            init: init.mouse.ui.event,
            kind: EventKind::Pointer(init),
        }
    }

    /// The name this event dispatches under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Common dispatch flags.
    #[must_use]
    pub fn init(&self) -> EventInit {
        self.init
    }

    /// Category-specific construction data.
    #[must_use]
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// The custom payload, downcast to `D`.
    ///
    /// Returns `None` for non-custom events, payload-free custom events,
    /// and payloads of a different type.
    #[must_use]
    pub fn detail<D: Any>(&self) -> Option<&D> {
        match &self.kind {
            EventKind::Custom {
                detail: Some(detail),
            } => detail.downcast_ref::<D>(),
            _ => None,
        }
    }

    /// A copy of this event dispatching under a different name.
    ///
    /// Used when a synthesized gesture is replayed through the native
    /// primitive it aliases.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            init: self.init,
            kind: self.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn custom_without_payload_has_no_detail() {
        let event = Event::custom("ready", EventInit::default());
        assert_eq!(event.detail::<u32>(), None);
    }

    #[test]
    fn detail_downcasts_by_exact_type() {
        let event = Event::custom_with("ready", "value", EventInit::default());
        assert_eq!(event.detail::<&str>(), Some(&"value"));
        assert_eq!(event.detail::<String>(), None);
    }

    #[test]
    fn typed_events_expose_no_detail() {
        let event = Event::touch("touchstart", TouchInit::default());
        assert_eq!(event.detail::<TouchInit>(), None);
        assert!(matches!(event.kind(), EventKind::Touch(_)));
    }

    #[test]
    fn typed_constructors_lift_common_flags() {
        let init = MouseInit {
            ui: UiInit {
                event: EventInit {
                    bubbles: true,
                    cancelable: true,
                    composed: false,
                },
                detail: 1,
            },
            ..MouseInit::default()
        };
        let event = Event::mouse("mousedown", init);
        assert!(event.init().bubbles);
        assert!(event.init().cancelable);
    }

    #[test]
    fn with_name_preserves_kind_and_flags() {
        let event = Event::pointer("pointerDown", PointerInit::default());
        let renamed = event.with_name("pointerdown".to_string());
        assert_eq!(renamed.name(), "pointerdown");
        assert_eq!(renamed.init(), event.init());
        assert!(matches!(renamed.kind(), EventKind::Pointer(_)));
    }
}
