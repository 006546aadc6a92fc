// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Thicket demo binaries.

use std::rc::Rc;

use thicket_emitter::{EventScope, NodeEmitter, PointerSupport};
use thicket_target::MemoryTarget;

/// A ready-made emitter over in-memory node and document targets.
#[derive(Debug)]
pub struct Stage {
    /// The node the emitter is bound to.
    pub node: Rc<MemoryTarget>,
    /// The document-level root shared through the scope.
    pub document: Rc<MemoryTarget>,
    /// The scope shared by emitters on this stage.
    pub scope: Rc<EventScope>,
    /// The emitter under demonstration.
    pub emitter: NodeEmitter,
}

impl Stage {
    /// Builds a stage for the given pointer capability.
    #[must_use]
    pub fn new(support: PointerSupport) -> Self {
        let document = Rc::new(MemoryTarget::new());
        let scope = Rc::new(EventScope::new(document.clone(), support));
        let node = Rc::new(MemoryTarget::new());
        let emitter = NodeEmitter::new(node.clone(), scope.clone());
        Self {
            node,
            document,
            scope,
            emitter,
        }
    }
}
