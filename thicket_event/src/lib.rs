// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_event --heading-base-level=0

//! Thicket Event: event values and the handler capability.
//!
//! This crate defines the two vocabulary types the rest of the workspace is
//! built around:
//!
//! - [`Event`]: an immutable event value carrying a name, common dispatch
//!   flags, and category-specific construction data tagged by [`EventKind`]
//!   (mouse, touch, pointer, keyboard, wheel, focus, UI, or custom with an
//!   arbitrary payload).
//! - [`Handler`]: an opaque, shareable callback compared by reference
//!   identity. Every registry in the workspace keys on that identity, the
//!   same way `removeEventListener` pairs with the exact function object
//!   passed to `addEventListener`.
//!
//! ## Minimal example
//!
//! ```
//! use thicket_event::{Event, EventInit, Handler};
//!
//! let event = Event::custom_with("ready", 7_u32, EventInit::default());
//! assert_eq!(event.name(), "ready");
//! assert_eq!(event.detail::<u32>(), Some(&7));
//!
//! let seen = std::rc::Rc::new(std::cell::Cell::new(false));
//! let handler = Handler::new({
//!     let seen = seen.clone();
//!     move |_event: &Event| seen.set(true)
//! });
//! handler.call(&event);
//! assert!(seen.get());
//! ```
//!
//! ## Design notes
//!
//! Events are plain values: constructing one performs no dispatch. Targets
//! and emitters (the `thicket_target` and `thicket_emitter` crates) decide
//! where and when an event value is delivered.
//!
//! Handlers are `Rc`-backed and deliberately not `Send`: the whole event
//! model is single-threaded, with dispatch running synchronously and
//! possibly reentrantly on one logical thread.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod handler;
mod init;

pub use event::{Event, EventKind};
pub use handler::Handler;
pub use init::{
    DeltaMode, EventInit, FocusInit, KeyboardInit, Modifiers, MouseInit, PointerInit, PointerType,
    TouchInit, TouchPoint, UiInit, WheelInit,
};
