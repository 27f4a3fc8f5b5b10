use stockroom_allocation::{AllocationJob, LineStatus};
use stockroom_app::InventoryService;
use stockroom_core::{JobId, PartId};
use stockroom_inventory::Part;

fn seeded_service() -> InventoryService {
    stockroom_observability::init();

    let mut service = InventoryService::new();
    service.add_part(Part::new(PartId::new(1), "hex bolt", 10, 5));
    service.add_part(Part::new(PartId::new(2), "gasket", 2, 5));
    service
}

#[test]
fn reorder_report_flags_only_parts_below_level() {
    let service = seeded_service();

    let report = service.reorder_report();
    assert_eq!(report.requests.len(), 1);
    assert_eq!(report.requests[0].part_id, PartId::new(2));
    assert_eq!(report.requests[0].shortfall, 3);
}

#[test]
fn allocation_flow_deducts_and_reports_per_line() {
    let mut service = seeded_service();

    let mut job = AllocationJob::new(JobId::new(101));
    job.require_part(PartId::new(1), 4);
    job.require_part(PartId::new(99), 1);

    let report = service.allocate_job(&mut job);
    assert_eq!(report.job_id, JobId::new(101));
    assert!(!report.fulfilled());

    // Lines are sorted by part id in the report.
    assert_eq!(report.lines[0].part_id, PartId::new(1));
    assert_eq!(report.lines[0].status, LineStatus::Allocated);
    assert_eq!(report.lines[1].part_id, PartId::new(99));
    assert_eq!(report.lines[1].status, LineStatus::Pending);

    let inventory = service.inventory_report();
    assert_eq!(inventory.quantities, vec![(PartId::new(1), 6), (PartId::new(2), 2)]);
}

#[test]
fn insufficient_stock_leaves_stock_untouched() {
    let mut service = seeded_service();

    let mut job = AllocationJob::new(JobId::new(102));
    job.require_part(PartId::new(2), 4);

    let report = service.allocate_job(&mut job);
    assert_eq!(report.lines[0].status, LineStatus::Pending);
    assert_eq!(service.warehouse().part(PartId::new(2)).unwrap().on_hand(), 2);
}

#[test]
fn inventory_report_tracks_every_action() {
    let mut service = seeded_service();

    service.adjust_quantity(PartId::new(1), -3);
    service.adjust_quantity(PartId::new(99), 5); // unknown id, ignored

    let report = service.inventory_report();
    assert_eq!(report.quantities, vec![(PartId::new(1), 7), (PartId::new(2), 2)]);
}

#[test]
fn reports_serialize_to_json() {
    let mut service = seeded_service();

    let mut job = AllocationJob::new(JobId::new(103));
    job.require_part(PartId::new(1), 1);
    let report = service.allocate_job(&mut job);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["job_id"], 103);
    assert_eq!(value["lines"][0]["part_id"], 1);
    assert_eq!(value["lines"][0]["status"], "allocated");
}
