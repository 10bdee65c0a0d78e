//! Submission cooldown gate.
//!
//! After a successful submission the client must wait before sending the
//! next report. The gate persists an absolute expiry (epoch millis) in the
//! `countdown_prefs` namespace so it survives process restarts.
//!
//! States: Idle (no persisted expiry) → Active (expiry in the future) →
//! Idle again on expiry or explicit reset.

use crate::db::prefs::{self, NS_COUNTDOWN};
use crate::errors::AppResult;
use crate::utils::time::now_millis;
use rusqlite::Connection;
use std::time::Duration;

pub const KEY_END_TIME: &str = "countdown_end_time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownState {
    Idle,
    Active { remaining_millis: i64 },
}

pub struct CooldownTimer<'c> {
    conn: &'c Connection,
}

impl<'c> CooldownTimer<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Persist `now + duration` and enter Active.
    pub fn start(&self, duration: Duration) -> AppResult<()> {
        let end = now_millis() + duration.as_millis() as i64;
        prefs::set_millis(self.conn, NS_COUNTDOWN, KEY_END_TIME, end)
    }

    /// Read the persisted expiry. An absent, corrupted or already-past
    /// value clears the key and reports Idle; otherwise the remaining
    /// time is reported, never negative.
    pub fn check_state(&self) -> AppResult<CooldownState> {
        let raw = prefs::get(self.conn, NS_COUNTDOWN, KEY_END_TIME)?;

        let Some(raw) = raw else {
            return Ok(CooldownState::Idle);
        };

        let end = raw.trim().parse::<i64>().unwrap_or(0);
        let remaining = end - now_millis();

        if remaining <= 0 {
            prefs::remove(self.conn, NS_COUNTDOWN, KEY_END_TIME)?;
            return Ok(CooldownState::Idle);
        }

        Ok(CooldownState::Active {
            remaining_millis: remaining,
        })
    }

    /// One-second-cadence recheck used by the watch loop. Reaching zero
    /// clears the persisted expiry exactly like `check_state`.
    pub fn tick(&self) -> AppResult<CooldownState> {
        self.check_state()
    }

    /// Unconditionally clear the persisted expiry.
    pub fn reset(&self) -> AppResult<()> {
        prefs::remove(self.conn, NS_COUNTDOWN, KEY_END_TIME)
    }
}
