// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk through tap recognition and touch/mouse deduplication on an
//! in-memory node.

use std::cell::Cell;
use std::rc::Rc;

use thicket_demos::Stage;
use thicket_emitter::{PointerSupport, names};
use thicket_event::{Event, Handler, PointerInit, TouchInit};
use thicket_target::{EventTarget, ListenerOptions};

fn main() {
    let stage = Stage::new(PointerSupport::PointerEvents);

    let taps = Rc::new(Cell::new(0_u32));
    let on_tap = Handler::new({
        let taps = taps.clone();
        move |_event| taps.set(taps.get() + 1)
    });
    stage
        .emitter
        .on(names::TAP, &on_tap, ListenerOptions::default());

    let downs = Rc::new(Cell::new(0_u32));
    let on_down = Handler::new({
        let downs = downs.clone();
        move |_event| downs.set(downs.get() + 1)
    });
    stage
        .emitter
        .on(names::POINTER_DOWN, &on_down, ListenerOptions::default());

    // A physical touch tap: the platform fires touchstart, a synthesized
    // pointerdown, then touchend. The pointer handler sees one press.
    stage.emitter.emit_touch("touchstart", TouchInit::default());
    stage
        .emitter
        .emit_pointer("pointerdown", PointerInit::default());
    stage.emitter.emit_touch("touchend", TouchInit::default());
    println!("after touch tap:  taps={} downs={}", taps.get(), downs.get());

    // A genuine mouse press is not suppressed.
    stage
        .emitter
        .emit_pointer("pointerdown", PointerInit::default());
    println!("after mouse press: taps={} downs={}", taps.get(), downs.get());

    // A drag is not a tap: the document-level move disarms recognition.
    stage.emitter.emit_touch("touchstart", TouchInit::default());
    stage
        .document
        .dispatch_event(&Event::touch("touchmove", TouchInit::default()));
    stage.emitter.emit_touch("touchend", TouchInit::default());
    println!("after drag:        taps={} downs={}", taps.get(), downs.get());

    stage.emitter.off_all();
    println!(
        "after teardown:    node listeners={} document listeners={}",
        stage.node.listener_count(),
        stage.document.listener_count()
    );
}
