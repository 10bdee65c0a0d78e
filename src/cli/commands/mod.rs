pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod records;
pub mod register;
pub mod report;
pub mod status;

use crate::errors::AppResult;
use std::io::{Write, stdin, stdout};

/// Read one line from stdin after printing a label.
pub(crate) fn prompt_line(label: &str) -> AppResult<String> {
    print!("{}: ", label);
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
