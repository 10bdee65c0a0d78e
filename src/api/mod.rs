//! HTTP client for the TrashReporter API.

pub mod client;
pub mod models;

use crate::errors::AppResult;
use std::future::Future;

/// Drive a request future to completion from the synchronous command
/// handlers. Each network command owns one short-lived runtime; the
/// request is an explicit awaited task, dropped (and thereby cancelled)
/// if the handler unwinds.
pub fn block_on<F: Future>(future: F) -> AppResult<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(future))
}
