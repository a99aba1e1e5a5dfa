use std::{fs, path::Path};

use anyhow::{Result, bail};
use colored::Colorize;

use crate::{
    config::{CONFIG_FILE_NAME, default_config_json},
    report::SUCCESS_MARK,
};

pub fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("{} Created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME);
    Ok(())
}
