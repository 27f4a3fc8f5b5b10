use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{JobId, PartId, ValueObject};
use stockroom_inventory::Warehouse;

/// State of one job line.
///
/// A line is either still waiting on stock (carrying the quantity it needs)
/// or satisfied. Keeping the two apart means a requested quantity of zero no
/// longer doubles as "fulfilled".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItem {
    Pending { required: i64 },
    Allocated,
}

/// Per-line allocation outcome as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Allocated,
    Pending,
}

impl ValueObject for LineStatus {}

/// A batch request for parts, resolved against one warehouse.
///
/// Each line is evaluated independently and exactly once per `allocate`
/// call. Lines that cannot be satisfied stay pending; lines already
/// allocated are skipped, so repeated calls are idempotent for them. There
/// is no rollback: an early line keeps its deduction even when a later line
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationJob {
    id: JobId,
    lines: HashMap<PartId, LineItem>,
}

impl AllocationJob {
    pub fn new(id: JobId) -> Self {
        Self {
            id,
            lines: HashMap::new(),
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    /// Record or overwrite the required quantity for a part.
    ///
    /// No sign or value validation; overwriting an allocated line resets it
    /// to pending at the new quantity.
    pub fn require_part(&mut self, part_id: PartId, quantity: i64) {
        self.lines
            .insert(part_id, LineItem::Pending { required: quantity });
    }

    /// Attempt to satisfy every pending line against `warehouse`.
    ///
    /// A line is allocated only when the warehouse can deduct its full
    /// required quantity in one step; a line is never partially filled.
    pub fn allocate(&mut self, warehouse: &mut Warehouse) {
        for (part_id, line) in self.lines.iter_mut() {
            if let LineItem::Pending { required } = *line {
                if warehouse.try_deduct(*part_id, required) {
                    *line = LineItem::Allocated;
                }
            }
        }
    }

    /// Allocation outcome per required part.
    pub fn status(&self) -> HashMap<PartId, LineStatus> {
        self.lines
            .iter()
            .map(|(part_id, line)| {
                let status = match line {
                    LineItem::Allocated => LineStatus::Allocated,
                    LineItem::Pending { .. } => LineStatus::Pending,
                };
                (*part_id, status)
            })
            .collect()
    }

    pub fn line(&self, part_id: PartId) -> Option<LineItem> {
        self.lines.get(&part_id).copied()
    }

    pub fn lines(&self) -> impl Iterator<Item = (PartId, LineItem)> + '_ {
        self.lines.iter().map(|(part_id, line)| (*part_id, *line))
    }

    /// True once every line has been allocated.
    pub fn is_fulfilled(&self) -> bool {
        self.lines
            .values()
            .all(|line| matches!(line, LineItem::Allocated))
    }
}
