use anyhow::Result;
use clap::{crate_description, crate_name, crate_version, App as Cli, Arg};
use todo_tui::{app::App, config::Config};

fn main() -> Result<()> {
    let matches = Cli::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory containing config.yml (default: ~/.config/todo-tui)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("Overrides the configured log level")
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(level) = matches.value_of("log-level") {
        config.set_log_level(level)?;
    }

    App::start(config)
}
