// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_emitter --heading-base-level=0

//! Thicket Emitter: a unified subscription surface over a DOM-like target.
//!
//! ## Overview
//!
//! [`NodeEmitter`] is one object through which callers attach, detach, and
//! synthesize events on an underlying `EventTarget`. Every call routes by
//! name:
//!
//! - plain native names (`"click"`, `"keydown"`, anything at all) pass
//!   straight through to the node's own listener contract;
//! - the gesture names in [`names`] are synthesized from raw touch, mouse,
//!   and pointer primitives. Touch-capable environments follow a physical
//!   touch with a synthesized mouse event for the same gesture; the
//!   synthesis layer suppresses that duplicate without suppressing genuine
//!   mouse-only input, and teardown reverses every registration an attach
//!   created.
//!
//! ## Quick start
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use thicket_emitter::{EventScope, NodeEmitter, PointerSupport, names};
//! use thicket_event::{Handler, PointerInit, TouchInit};
//! use thicket_target::{ListenerOptions, MemoryTarget};
//!
//! let document = Rc::new(MemoryTarget::new());
//! let scope = Rc::new(EventScope::new(document, PointerSupport::PointerEvents));
//! let node = Rc::new(MemoryTarget::new());
//! let emitter = NodeEmitter::new(node, scope);
//!
//! let downs = Rc::new(Cell::new(0));
//! let handler = Handler::new({
//!     let downs = downs.clone();
//!     move |_event| downs.set(downs.get() + 1)
//! });
//! emitter.on(names::POINTER_DOWN, &handler, ListenerOptions::default());
//!
//! // A physical touch arrives as a touch event plus a synthesized pointer
//! // event; the handler sees the gesture once.
//! emitter.emit_touch("touchstart", TouchInit::default());
//! emitter.emit_pointer("pointerdown", PointerInit::default());
//! assert_eq!(downs.get(), 1);
//!
//! emitter.off(names::POINTER_DOWN, &handler);
//! ```
//!
//! ## Scopes
//!
//! Emitters share gesture state through an [`EventScope`]: the registry of
//! synthesized registrations, the document-level root that tap cancellation
//! listens on, and the pointer capability resolved once at construction.
//! Build one scope per process — or one per test, which is the point of it
//! being a value rather than a global.
//!
//! ## Teardown
//!
//! Registrations live until removed. [`NodeEmitter::off_all`] reverses
//! everything made through an emitter; dropping the last handle to an
//! emitter without it leaks whatever native listener registrations were
//! still live on the node and the scope's document root.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod emitter;
mod gesture;
mod registry;
mod scope;

pub use emitter::NodeEmitter;
pub use gesture::{DedupState, Gesture, TapState};
pub use scope::{EventScope, PointerSupport};

pub mod names {
    //! Stable event and gesture name identifiers.
    //!
    //! [`TAP`], [`POINTER_TAP`], [`POINTER_DOWN`], [`POINTER_UP`], and
    //! [`POINTER_MOVE`] designate synthesized gestures; subscribing to them
    //! attaches the synthesis layer. Everything else here is a plain native
    //! name.

    /// Native mouse click.
    pub const CLICK: &str = "click";
    /// Touch-only tap gesture: press and release with no intervening move,
    /// leave, or cancel.
    pub const TAP: &str = "tap";
    /// Tap unified with native `click`, with duplicate firing suppressed.
    pub const POINTER_TAP: &str = "pointerTap";
    /// Unified press gesture over `touchstart` and
    /// `pointerdown`/`mousedown`.
    pub const POINTER_DOWN: &str = "pointerDown";
    /// Unified release gesture over `touchend` and `pointerup`/`mouseup`.
    pub const POINTER_UP: &str = "pointerUp";
    /// Unified motion gesture over `touchmove` and
    /// `pointermove`/`mousemove`.
    pub const POINTER_MOVE: &str = "pointerMove";

    /// Hover-enter alias. Not yet gesture-backed; routes as a native name.
    pub const MOUSE_OVER: &str = "mouseover";
    /// Hover-exit alias. Not yet gesture-backed; routes as a native name.
    pub const MOUSE_OUT: &str = "mouseout";
    /// Boundary-enter alias. Not yet gesture-backed; routes as a native
    /// name.
    pub const MOUSE_ENTER: &str = "mouseenter";
    /// Boundary-exit alias. Not yet gesture-backed; routes as a native
    /// name.
    pub const MOUSE_LEAVE: &str = "mouseleave";
}
