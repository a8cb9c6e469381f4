// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;
use laptop_tracker_domain::{LaptopStatus, ShipmentStage, ShipmentVariant};
use laptop_tracker_persistence::Persistence;

use crate::Args;
use crate::commands::{Command, run};
use crate::error::CliError;

fn execute(persistence: &mut Persistence, argv: &[&str]) -> Result<serde_json::Value, CliError> {
    let args: Args = Args::try_parse_from(std::iter::once("laptop-tracker").chain(argv.iter().copied()))
        .unwrap();
    let output: String = run(persistence, args.command)?;
    Ok(serde_json::from_str(&output).unwrap())
}

#[test]
fn test_parse_create_shipment() {
    let args: Args = Args::try_parse_from([
        "laptop-tracker",
        "create-shipment",
        "--variant",
        "bulk_to_warehouse",
        "--client-company-id",
        "4",
        "--laptop-count",
        "3",
        "--ticket",
        "SCOP-1001",
    ])
    .unwrap();

    assert!(args.database.is_none());
    assert!(matches!(
        args.command,
        Command::CreateShipment {
            variant: ShipmentVariant::BulkToWarehouse,
            client_company_id: Some(4),
            laptop_count: 3,
            ..
        }
    ));
}

#[test]
fn test_parse_rejects_unknown_stage() {
    let result = Args::try_parse_from(["laptop-tracker", "advance-shipment", "1", "--to", "lost"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_eta_and_database() {
    let args: Args = Args::try_parse_from([
        "laptop-tracker",
        "--database",
        "tracker.db",
        "advance-shipment",
        "1",
        "--to",
        "in_transit_to_engineer",
        "--eta",
        "2026-03-05T12:00:00Z",
    ])
    .unwrap();

    assert_eq!(args.database.as_deref(), Some("tracker.db"));
    match args.command {
        Command::AdvanceShipment { to, eta, .. } => {
            assert_eq!(to, ShipmentStage::InTransitToEngineer);
            assert!(eta.is_some());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_shipment_commands_end_to_end() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let created = execute(
        &mut persistence,
        &[
            "create-shipment",
            "--variant",
            "warehouse_to_engineer",
            "--client-company-id",
            "1",
            "--engineer-id",
            "7",
            "--ticket",
            "SCOP-1001",
        ],
    )
    .unwrap();
    assert_eq!(created["stage"], "released_from_warehouse");

    execute(
        &mut persistence,
        &["advance-shipment", "1", "--to", "in_transit_to_engineer"],
    )
    .unwrap();

    let timeline = execute(&mut persistence, &["timeline", "1"]).unwrap();
    let states: Vec<&str> = timeline
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["state"].as_str().unwrap())
        .collect();
    assert_eq!(states, vec!["completed", "current", "pending"]);
    assert_eq!(timeline[1]["is_current_stage"], true);

    let history = execute(&mut persistence, &["shipment-history", "1"]).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[test]
fn test_reception_commands_end_to_end() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    execute(
        &mut persistence,
        &["create-laptop", "--serial", "PF-3K9XQ1", "--status", "at_warehouse"],
    )
    .unwrap();
    execute(
        &mut persistence,
        &[
            "create-report",
            "1",
            "--serial-photo",
            "serial.jpg",
            "--external-photo",
            "external.jpg",
            "--working-photo",
            "working.jpg",
        ],
    )
    .unwrap();

    let pending = execute(&mut persistence, &["pending-reports"]).unwrap();
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let approved = execute(&mut persistence, &["approve-report", "1", "--approved-by", "12"]).unwrap();
    assert_eq!(approved["laptop"]["status"], "available");
    assert_eq!(approved["report"]["status"], "approved");

    let err: CliError = execute(&mut persistence, &["approve-report", "1", "--approved-by", "12"])
        .unwrap_err();
    assert!(err.to_string().contains("already approved"));
    assert_eq!(
        persistence.get_laptop(1).unwrap().status,
        LaptopStatus::Available
    );
}

#[test]
fn test_laptop_status_command_refuses_available() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    execute(
        &mut persistence,
        &["create-laptop", "--serial", "SN-1", "--status", "at_warehouse"],
    )
    .unwrap();

    assert!(execute(&mut persistence, &["laptop-status", "1", "--to", "available"]).is_err());
    let retired = execute(&mut persistence, &["laptop-status", "1", "--to", "retired"]).unwrap();
    assert_eq!(retired["status"], "retired");
}

#[test]
fn test_package_metadata_declares_no_repository() {
    assert_eq!(env!("CARGO_PKG_REPOSITORY"), "");
    assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT");
}
