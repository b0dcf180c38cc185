use std::fs;
use super::config::Config;
use super::error::Result;


pub fn load_config(path: &str) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(text)?;
    config.parameters.validate()?;
    Ok(config)
}
