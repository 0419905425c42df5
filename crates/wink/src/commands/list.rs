use clap::ArgMatches;
use tracing::{error, info};

use wink_core::engine::EngineError;
use wink_core::events;
use wink_core::source::platform_source;

use super::helpers::{
    load_config_with_warning, print_permission_tip, refresh_records, render_records,
};

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let config = load_config_with_warning();
    let result = platform_source(&config)
        .map_err(EngineError::from)
        .and_then(|source| refresh_records(source.as_ref(), &config));

    match result {
        Ok(records) => {
            render_records(&records, json_output)?;

            info!(event = "cli.list_completed", count = records.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_permission_tip(&e);

            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
