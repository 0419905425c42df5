use clap::ArgMatches;
use tracing::error;

use wink_core::events;

pub mod helpers;

mod activate;
mod completions;
mod list;
mod search;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("search", sub_matches)) => search::handle_search_command(sub_matches),
        Some(("activate", sub_matches)) => activate::handle_activate_command(sub_matches),
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
