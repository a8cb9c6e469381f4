// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and their dispatch.
//!
//! Every command prints its result as pretty JSON on stdout.

use clap::Subcommand;
use laptop_tracker_domain::{
    LaptopStatus, NewLaptop, NewShipment, ReceptionPhotos, ShipmentStage, ShipmentVariant,
};
use laptop_tracker_persistence::Persistence;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::error::CliError;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a shipment at its variant's first stage
    CreateShipment {
        /// `single_full_journey`, `bulk_to_warehouse` or `warehouse_to_engineer`
        #[arg(long)]
        variant: ShipmentVariant,
        #[arg(long)]
        client_company_id: Option<i64>,
        #[arg(long)]
        engineer_id: Option<i64>,
        #[arg(long, default_value_t = 1)]
        laptop_count: u32,
        /// Ticket key, e.g. SCOP-1001
        #[arg(long)]
        ticket: String,
        #[arg(long)]
        tracking_number: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Move a shipment to its next stage
    AdvanceShipment {
        shipment_id: i64,
        /// The stage to enter; must be the next one on the shipment's path
        #[arg(long)]
        to: ShipmentStage,
        /// Expected arrival (RFC 3339), kept when entering `in_transit_to_engineer`
        #[arg(long, value_parser = parse_timestamp)]
        eta: Option<OffsetDateTime>,
    },
    /// Show a shipment's timeline
    Timeline { shipment_id: i64 },
    /// Show a shipment's recorded stage changes
    ShipmentHistory { shipment_id: i64 },
    /// Register a laptop
    CreateLaptop {
        #[arg(long)]
        serial: String,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        client_company_id: Option<i64>,
        #[arg(long, default_value = "in_transit_to_warehouse")]
        status: LaptopStatus,
    },
    /// Change a laptop's status (never to `available`)
    LaptopStatus {
        laptop_id: i64,
        #[arg(long)]
        to: LaptopStatus,
    },
    /// File a reception report for a laptop at the warehouse
    CreateReport {
        laptop_id: i64,
        #[arg(long)]
        serial_photo: String,
        #[arg(long)]
        external_photo: String,
        #[arg(long)]
        working_photo: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Approve a reception report and make its laptop available
    ApproveReport {
        report_id: i64,
        #[arg(long)]
        approved_by: i64,
    },
    /// List reception reports awaiting approval
    PendingReports,
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(value, &Rfc3339)
}

fn render<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Runs `command` against `persistence` and returns the rendered result.
///
/// # Errors
///
/// Returns an error if the operation is refused or the output cannot be
/// rendered.
pub fn run(persistence: &mut Persistence, command: Command) -> Result<String, CliError> {
    debug!(?command, "Running command");

    match command {
        Command::CreateShipment {
            variant,
            client_company_id,
            engineer_id,
            laptop_count,
            ticket,
            tracking_number,
            notes,
        } => {
            let request = NewShipment {
                variant,
                client_company_id,
                software_engineer_id: engineer_id,
                laptop_count,
                ticket_key: ticket,
                tracking_number,
                notes,
            };
            render(&persistence.create_shipment(&request, None)?)
        }
        Command::AdvanceShipment {
            shipment_id,
            to,
            eta,
        } => render(&persistence.advance_shipment(shipment_id, to, eta)?.shipment()),
        Command::Timeline { shipment_id } => {
            render(&persistence.get_shipment_timeline(shipment_id)?)
        }
        Command::ShipmentHistory { shipment_id } => {
            render(&persistence.get_shipment_history(shipment_id)?)
        }
        Command::CreateLaptop {
            serial,
            brand,
            model,
            client_company_id,
            status,
        } => {
            let request = NewLaptop {
                serial_number: serial,
                brand,
                model,
                client_company_id,
                status,
            };
            render(&persistence.create_laptop(&request)?)
        }
        Command::LaptopStatus { laptop_id, to } => {
            render(&persistence.change_laptop_status(laptop_id, to)?)
        }
        Command::CreateReport {
            laptop_id,
            serial_photo,
            external_photo,
            working_photo,
            notes,
        } => {
            let photos = ReceptionPhotos {
                serial_number: serial_photo,
                external_condition: external_photo,
                working_condition: working_photo,
            };
            render(&persistence.create_reception_report(laptop_id, photos, notes)?)
        }
        Command::ApproveReport {
            report_id,
            approved_by,
        } => render(&persistence.approve_reception_report(report_id, approved_by)?),
        Command::PendingReports => render(&persistence.list_pending_reception_reports()?),
    }
}
