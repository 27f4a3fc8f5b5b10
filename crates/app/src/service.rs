use chrono::Utc;

use stockroom_allocation::AllocationJob;
use stockroom_core::PartId;
use stockroom_inventory::{Part, Warehouse};

use crate::report::{InventoryReport, JobReport, LineReport, ReorderReport};

/// Application service owning one warehouse.
///
/// Each operation logs, delegates to the domain, and returns a report where
/// an interactive front-end would print.
#[derive(Debug, Default)]
pub struct InventoryService {
    warehouse: Warehouse,
}

impl InventoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a part record.
    pub fn add_part(&mut self, part: Part) {
        tracing::info!(
            "registering part {} ({:?}): {} on hand, reorder level {}",
            part.id(),
            part.name(),
            part.on_hand(),
            part.reorder_level()
        );
        self.warehouse.upsert_part(part);
    }

    /// Apply a signed stock adjustment. Unknown part ids are ignored.
    pub fn adjust_quantity(&mut self, part_id: PartId, delta: i64) {
        tracing::debug!("adjusting part {} by {}", part_id, delta);
        self.warehouse.adjust_quantity(part_id, delta);
    }

    /// Scan for parts below their reorder level.
    pub fn reorder_report(&self) -> ReorderReport {
        let mut requests = self.warehouse.reorder_requests();
        requests.sort_by_key(|request| request.part_id);

        for request in &requests {
            tracing::info!(
                "part {} is {} unit(s) below its reorder level",
                request.part_id,
                request.shortfall
            );
        }

        ReorderReport {
            generated_at: Utc::now(),
            requests,
        }
    }

    /// Run one allocation pass for `job` and report the per-line outcome.
    pub fn allocate_job(&mut self, job: &mut AllocationJob) -> JobReport {
        tracing::info!("allocating job {} ({} line(s))", job.id(), job.lines().count());
        job.allocate(&mut self.warehouse);

        let mut lines: Vec<LineReport> = job
            .status()
            .into_iter()
            .map(|(part_id, status)| LineReport { part_id, status })
            .collect();
        lines.sort_by_key(|line| line.part_id);

        JobReport {
            job_id: job.id(),
            generated_at: Utc::now(),
            lines,
        }
    }

    /// Snapshot every known part's quantity.
    pub fn inventory_report(&self) -> InventoryReport {
        let mut quantities: Vec<(PartId, i64)> =
            self.warehouse.quantities().into_iter().collect();
        quantities.sort_by_key(|(part_id, _)| *part_id);

        InventoryReport {
            generated_at: Utc::now(),
            quantities,
        }
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub fn warehouse_mut(&mut self) -> &mut Warehouse {
        &mut self.warehouse
    }
}
