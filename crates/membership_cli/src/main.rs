//! Membership dashboard probe.
//!
//! # Responsibility
//! - Open the configured member store the way the desktop shell does.
//! - Print the dashboard numbers and the member list for quick local checks.

use membership_core::config::DEFAULT_CONFIG_FILE_NAME;
use membership_core::{AppConfig, AppContext, AppError};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("membership: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load_or_default(DEFAULT_CONFIG_FILE_NAME)?;
    let context = AppContext::open(config)?;
    let members = context.members()?;

    let stats = members.member_stats()?;
    println!("Total Members: {}", stats.count);
    println!(
        "Last Update: {}",
        stats.last_join_date.as_deref().unwrap_or("N/A")
    );

    for listing in members.list_members()? {
        println!(
            "{}\t{}\t{}",
            listing.full_name,
            listing.date_joined,
            listing.date_exit.as_deref().unwrap_or("N/A")
        );
    }

    Ok(())
}
