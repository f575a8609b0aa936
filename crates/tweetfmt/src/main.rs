#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod format;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Format scraped tweet JSON into a readable text document"
)]
pub struct App {
    /// Path to the tweets JSON file
    pub input: std::path::PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    crate::format::run(app)
}
