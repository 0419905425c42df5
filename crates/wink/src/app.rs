use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("wink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List, search, and activate macOS windows")
        .long_about("wink merges the window server's flat listing with each application's accessibility tree into one deduplicated window list, then lets you search it and bring any window to the foreground.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List every switchable window")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("search")
                .about("Search windows by title or application name")
                .arg(
                    Arg::new("query")
                        .help("Case-insensitive substring to match")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("activate")
                .about("Bring the first window matching a query to the foreground")
                .arg(
                    Arg::new("query")
                        .help("Case-insensitive substring to match")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("index")
                        .long("index")
                        .short('i')
                        .help("Activate the Nth match instead of the first (1-based)")
                        .value_parser(clap::value_parser!(usize))
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}
