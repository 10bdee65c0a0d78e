//! Report submission flow: cooldown gate → validate → encode → POST →
//! persist.

use crate::api::block_on;
use crate::api::client::ReportClient;
use crate::api::models::SubmitRequest;
use crate::config::Config;
use crate::config::resolver::ConfigResolver;
use crate::core::cooldown::{CooldownState, CooldownTimer};
use crate::core::validate;
use crate::db::log::ttlog;
use crate::db::queries::insert_report;
use crate::device;
use crate::errors::{AppError, AppResult};
use crate::models::report::{Coordinates, StoredReport};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rusqlite::Connection;
use std::fs;
use std::time::Duration;

pub struct SubmitLogic;

/// What the server said about an accepted report.
pub struct SubmitOutcome {
    pub message: String,
    pub report_id: Option<i64>,
    pub status: String,
}

/// Refused locally: the cooldown is still running.
pub struct CooldownRefusal {
    pub remaining_millis: i64,
}

impl SubmitLogic {
    /// Submit one report. Returns Err on validation/transport failures,
    /// Ok(Err(refusal)) when the cooldown gate refuses, Ok(Ok(outcome))
    /// on acceptance. Acceptance also starts the cooldown and journals
    /// the report locally.
    pub fn submit(
        conn: &Connection,
        cfg: &Config,
        resolver: &mut ConfigResolver,
        image_path: &str,
        coords: Coordinates,
        comment: &str,
    ) -> AppResult<Result<SubmitOutcome, CooldownRefusal>> {
        let timer = CooldownTimer::new(conn);
        if let CooldownState::Active { remaining_millis } = timer.check_state()? {
            return Ok(Err(CooldownRefusal { remaining_millis }));
        }

        validate::validate_coordinates(coords.latitude, coords.longitude)?;
        validate::validate_comment(comment)?;

        let image_bytes = fs::read(image_path)
            .map_err(|e| AppError::InvalidImage(format!("{}: {}", image_path, e)))?;
        if image_bytes.is_empty() {
            return Err(AppError::InvalidImage(format!("{}: empty file", image_path)));
        }
        let image_b64 = BASE64.encode(&image_bytes);

        let device_id = device::resolve(conn, cfg)?;

        let request = SubmitRequest::new(image_b64, coords, device_id.clone(), comment);
        let client = ReportClient::new(resolver.resolve()?)?;
        let response = block_on(client.submit(&request))??;

        // Accepted: arm the gate and journal the submission
        timer.start(Duration::from_secs(cfg.cooldown_secs))?;

        let status = if response.status.is_empty() {
            "Received".to_string()
        } else {
            response.status.clone()
        };
        insert_report(
            conn,
            &StoredReport::from_submission(&coords, &status, comment, true),
        )?;

        if let Err(e) = ttlog(
            conn,
            "report",
            &device_id,
            &format!("Report submitted from {}", coords.display()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(Ok(SubmitOutcome {
            message: response.message,
            report_id: response.report_id,
            status,
        }))
    }
}
