use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, PartId};

/// A trackable stock item.
///
/// The identifier is caller-assigned and unique within a warehouse; nothing
/// constrains the remaining fields. On-hand quantity is allowed to go
/// negative, since adjustments are never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    on_hand: i64,
    reorder_level: i64,
}

impl Part {
    pub fn new(id: PartId, name: impl Into<String>, on_hand: i64, reorder_level: i64) -> Self {
        Self {
            id,
            name: name.into(),
            on_hand,
            reorder_level,
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn on_hand(&self) -> i64 {
        self.on_hand
    }

    pub fn reorder_level(&self) -> i64 {
        self.reorder_level
    }

    /// Apply a signed quantity adjustment in place.
    pub fn adjust(&mut self, delta: i64) {
        self.on_hand += delta;
    }

    /// True when on-hand stock sits strictly below the reorder level.
    pub fn needs_reorder(&self) -> bool {
        self.on_hand < self.reorder_level
    }

    /// Units needed to climb back to the reorder level.
    ///
    /// Only meaningful when `needs_reorder()` holds; the reorder scan never
    /// emits it otherwise.
    pub fn shortfall(&self) -> i64 {
        self.reorder_level - self.on_hand
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> PartId {
        self.id
    }
}
