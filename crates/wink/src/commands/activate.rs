use clap::ArgMatches;
use tracing::{error, info};

use wink_core::engine::EngineError;
use wink_core::events;
use wink_core::source::platform_source;
use wink_core::window_ops;

use super::helpers::{load_config_with_warning, print_permission_tip, refresh_records};

pub(crate) fn handle_activate_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = matches
        .get_one::<String>("query")
        .ok_or("Query argument is required")?;
    let index = matches.get_one::<usize>("index").copied().unwrap_or(1);

    let Some(position) = index.checked_sub(1) else {
        eprintln!("Error: --index is 1-based; use 1 for the first match.");
        error!(event = "cli.activate_invalid_index", index = index);
        return Err("--index is 1-based".into());
    };

    info!(event = "cli.activate_started", query = query, index = index);

    let config = load_config_with_warning();
    let source = match platform_source(&config) {
        Ok(source) => source,
        Err(e) => {
            let e = EngineError::from(e);
            eprintln!("Error: {}", e);

            error!(event = "cli.activate_failed", query = query, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let records = match refresh_records(source.as_ref(), &config) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_permission_tip(&e);

            error!(event = "cli.activate_failed", query = query, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let indices = window_ops::filter_indices(query, &records);
    let Some(&record_index) = indices.get(position) else {
        let e = EngineError::NoMatch {
            query: query.clone(),
        };
        eprintln!("Error: {}", e);
        if indices.is_empty() {
            eprintln!("Tip: Use 'wink list' to see every switchable window.");
        } else {
            eprintln!(
                "Tip: Only {} window(s) match; --index is 1-based.",
                indices.len()
            );
        }

        error!(event = "cli.activate_failed", query = query, error = %e);
        events::log_app_error(&e);
        return Err(e.into());
    };
    let record = &records[record_index];

    match window_ops::activate_window(source.as_ref(), record) {
        Ok(()) => {
            println!("Activated '{}' ({})", record.title, record.owner_name);

            info!(
                event = "cli.activate_completed",
                title = %record.title,
                pid = record.owner_pid
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);

            error!(event = "cli.activate_failed", query = query, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
