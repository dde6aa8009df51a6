// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, read configuration, open the
//   console once and hand everything to `ui::run`.
// - The console is dropped when `main` returns, on every path.

use joke_cli::{cli::Command, config::Config, console, ui};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let command = Command::from_args(std::env::args());
    let config = Config::from_env();
    log::debug!("{:?} with {:?}", command, config);

    let mut console = console::open();
    ui::run(command, &config, console.as_mut())
}
