// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options for each event category.
//!
//! Every typed event carries one of these init structs, mirroring the
//! per-category init dictionaries of the web event model. Only the fields
//! the typed dispatch surface actually exercises are modeled; anything an
//! application needs beyond them belongs in a custom event payload.

use alloc::string::String;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

bitflags::bitflags! {
    /// Keyboard modifier keys held while an input event fires.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// The Alt (Option) key.
        const ALT = 1 << 0;
        /// The Control key.
        const CTRL = 1 << 1;
        /// The Meta (Command / Windows) key.
        const META = 1 << 2;
        /// The Shift key.
        const SHIFT = 1 << 3;
    }
}

/// Dispatch flags shared by every event category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventInit {
    /// Whether the event propagates up a containment hierarchy.
    pub bubbles: bool,
    /// Whether a handler may cancel the event's default action.
    pub cancelable: bool,
    /// Whether the event crosses shadow-boundary-like seams.
    pub composed: bool,
}

/// Options for a UI event (load, resize, scroll, select, …).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiInit {
    /// Common dispatch flags.
    pub event: EventInit,
    /// Category-specific click/detail count.
    pub detail: i32,
}

/// Options for a mouse button or movement event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseInit {
    /// The UI-event layer this category extends.
    pub ui: UiInit,
    /// Pointer position in viewport coordinates.
    pub position: Point,
    /// The button whose state change fired the event.
    pub button: i16,
    /// Bit set of buttons held during the event.
    pub buttons: u16,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

/// Options for a keyboard event (keydown, keyup, …).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardInit {
    /// Common dispatch flags.
    pub event: EventInit,
    /// The logical key value (`"a"`, `"Enter"`, …).
    pub key: String,
    /// The physical key code (`"KeyA"`, `"Enter"`, …).
    pub code: String,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
    /// Whether the event comes from a held-down key auto-repeating.
    pub repeat: bool,
}

/// Units a wheel delta is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeltaMode {
    /// Delta in pixels.
    #[default]
    Pixel,
    /// Delta in lines.
    Line,
    /// Delta in pages.
    Page,
}

/// Options for a wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInit {
    /// The mouse-event layer this category extends.
    pub mouse: MouseInit,
    /// Scroll delta along both axes.
    pub delta: Vec2,
    /// Units of `delta`.
    pub delta_mode: DeltaMode,
}

/// Options for a focus transition event (focus, blur, focusin, focusout).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusInit {
    /// Common dispatch flags.
    pub event: EventInit,
}

/// One touch contact point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Stable identifier for this contact across its start/move/end events.
    pub id: i32,
    /// Contact position in viewport coordinates.
    pub position: Point,
}

/// Options for a touch event (touchstart, touchend, touchmove, …).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchInit {
    /// Common dispatch flags.
    pub event: EventInit,
    /// The contacts participating in this event.
    pub touches: SmallVec<[TouchPoint; 2]>,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

/// The device class behind a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerType {
    /// A mouse or mouse-like device.
    #[default]
    Mouse,
    /// A stylus.
    Pen,
    /// A finger on a touch surface.
    Touch,
}

/// Options for a unified pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInit {
    /// The mouse-event layer this category extends.
    pub mouse: MouseInit,
    /// Stable identifier for the pointer across its lifetime.
    pub pointer_id: i32,
    /// The device class that produced the event.
    pub pointer_type: PointerType,
    /// Whether this is the primary pointer of its class.
    pub is_primary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_compose() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
    }

    #[test]
    fn defaults_are_inert() {
        let init = MouseInit::default();
        assert!(!init.ui.event.bubbles);
        assert_eq!(init.position, Point::ZERO);
        assert_eq!(init.buttons, 0);
        assert!(init.modifiers.is_empty());

        let touch = TouchInit::default();
        assert!(touch.touches.is_empty());
    }

    #[test]
    fn touch_points_stay_inline_for_two_contacts() {
        let mut init = TouchInit::default();
        init.touches.push(TouchPoint {
            id: 1,
            position: Point::new(10.0, 10.0),
        });
        init.touches.push(TouchPoint {
            id: 2,
            position: Point::new(20.0, 20.0),
        });
        assert!(!init.touches.spilled());
    }
}
