mod app;
mod config;
mod content;
mod diagram;
mod error;
mod events;
mod state;
mod ui;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use clap::{App as ClapApp, Arg};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal viewer for the vendor update process guide")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding the configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("image")
                .short("i")
                .long("image")
                .value_name("FILE")
                .help("Image file to attach as the process visual on startup")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let startup_image = matches.value_of("image").map(PathBuf::from);
    App::start(config, startup_image).await
}
