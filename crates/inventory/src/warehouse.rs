use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{PartId, ValueObject};

use crate::part::Part;

/// Restock request derived from a reorder scan.
///
/// Produced fresh on every scan, never stored. `shortfall` is strictly
/// positive: the scan only emits parts sitting below their reorder level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub part_id: PartId,
    pub shortfall: i64,
}

impl ValueObject for ReorderRequest {}

/// The authoritative in-memory set of part records.
///
/// All mutation is permissive: unknown identifiers are ignored, duplicate
/// inserts overwrite, and no quantity validation is applied anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warehouse {
    parts: HashMap<PartId, Part>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a part keyed by its identifier.
    ///
    /// An existing record with the same identifier is replaced wholesale;
    /// quantities are not merged.
    pub fn upsert_part(&mut self, part: Part) {
        self.parts.insert(part.id(), part);
    }

    /// Add `delta` (positive or negative) to a part's on-hand quantity.
    ///
    /// Unknown identifiers are a silent no-op, and nothing stops the
    /// quantity from going negative.
    pub fn adjust_quantity(&mut self, part_id: PartId, delta: i64) {
        if let Some(part) = self.parts.get_mut(&part_id) {
            part.adjust(delta);
        }
    }

    /// One request per part below its reorder level.
    ///
    /// Iteration order is unspecified; callers must not rely on it.
    pub fn reorder_requests(&self) -> Vec<ReorderRequest> {
        self.parts
            .values()
            .filter(|part| part.needs_reorder())
            .map(|part| ReorderRequest {
                part_id: part.id(),
                shortfall: part.shortfall(),
            })
            .collect()
    }

    /// Snapshot of every known part's on-hand quantity at this instant.
    ///
    /// Not a live view: later mutations do not show up in a snapshot already
    /// taken.
    pub fn quantities(&self) -> HashMap<PartId, i64> {
        self.parts
            .iter()
            .map(|(id, part)| (*id, part.on_hand()))
            .collect()
    }

    /// Atomic check-and-deduct.
    ///
    /// Deducts `quantity` and returns true only when the part exists and has
    /// at least that much on hand; otherwise the store is left untouched and
    /// false is returned. Single-line allocation goes through here so the
    /// check and the deduction cannot be separated.
    pub fn try_deduct(&mut self, part_id: PartId, quantity: i64) -> bool {
        match self.parts.get_mut(&part_id) {
            Some(part) if part.on_hand() >= quantity => {
                part.adjust(-quantity);
                true
            }
            _ => false,
        }
    }

    pub fn part(&self, part_id: PartId) -> Option<&Part> {
        self.parts.get(&part_id)
    }

    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
