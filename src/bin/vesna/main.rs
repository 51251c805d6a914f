//! Command-line front end: `describe`, `regress` and `report`.

use env_logger::Env;

mod command;

fn main() -> anyhow::Result<()> {
    let env = Env::default().filter_or("LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    command::run()
}
