use std::rc::Rc;

use displays::sink::ConsoleSink;
use log::{debug, error};

use crate::config::app::AppConfig;

mod config;
mod driver;
mod error;

fn main() -> anyhow::Result<()> {
    config::log::init();

    let app_config = AppConfig::new()?;
    debug!("Starting sensor with configuration: {:?}", app_config);

    if let Err(err) = driver::run(&app_config, Rc::new(ConsoleSink)) {
        error!("{}", err);
        return Err(err.into());
    }
    Ok(())
}
