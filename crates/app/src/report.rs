//! Report payloads handed back to the caller after each action.
//!
//! Reports are plain data; rendering belongs to the caller. Entries are
//! sorted by part id for stable output; the store itself guarantees no
//! ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_allocation::LineStatus;
use stockroom_core::{JobId, PartId, ValueObject};
use stockroom_inventory::ReorderRequest;

/// Point-in-time view of every known part's on-hand quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub generated_at: DateTime<Utc>,
    pub quantities: Vec<(PartId, i64)>,
}

/// Parts currently sitting below their reorder level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderReport {
    pub generated_at: DateTime<Utc>,
    pub requests: Vec<ReorderRequest>,
}

/// One line of a job report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineReport {
    pub part_id: PartId,
    pub status: LineStatus,
}

impl ValueObject for LineReport {}

/// Outcome of one allocation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobReport {
    pub job_id: JobId,
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<LineReport>,
}

impl JobReport {
    /// True when every line of the attempt came back allocated.
    pub fn fulfilled(&self) -> bool {
        self.lines
            .iter()
            .all(|line| line.status == LineStatus::Allocated)
    }
}
