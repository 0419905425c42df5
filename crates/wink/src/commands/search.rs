use clap::ArgMatches;
use tracing::{error, info};

use wink_core::engine::EngineError;
use wink_core::events;
use wink_core::source::platform_source;
use wink_core::window_ops;

use super::helpers::{
    load_config_with_warning, print_permission_tip, refresh_records, render_records,
};

pub(crate) fn handle_search_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = matches
        .get_one::<String>("query")
        .ok_or("Query argument is required")?;
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.search_started",
        query = query,
        json_output = json_output
    );

    let config = load_config_with_warning();
    let result = platform_source(&config)
        .map_err(EngineError::from)
        .and_then(|source| refresh_records(source.as_ref(), &config));

    match result {
        Ok(records) => {
            let results = window_ops::search_windows(query, &records);

            if results.is_empty() && !json_output {
                println!("No windows match '{}'.", query);
            } else {
                render_records(&results, json_output)?;
            }

            info!(
                event = "cli.search_completed",
                query = query,
                count = results.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_permission_tip(&e);

            error!(event = "cli.search_failed", query = query, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
