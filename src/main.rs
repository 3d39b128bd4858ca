mod app;
mod config;
mod error;
mod events;
mod identity;
mod logger;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as Cli, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("join-tui")
        .version(crate_version!())
        .about("Create an account with a network identity service from the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("base-url")
                .short("u")
                .long("base-url")
                .value_name("URL")
                .help("Identity service base URL, overriding the configuration file")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(base_url) = matches.value_of("base-url") {
        config.set_base_url(base_url)?;
    }

    App::start(config).await
}
