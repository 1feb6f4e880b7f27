use std::net::SocketAddr;
use std::path::Path;

use home::Aliases;
use log::info;

use crate::{Error, Result};

const ADDRESS: &str = "CONTROLROOM_ADDRESS";
const ALIASES: &str = "CONTROLROOM_ALIASES";
const ACK_DEEP_LINKS: &str = "CONTROLROOM_ACK_DEEP_LINKS";

const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, Debug)]
pub struct Config {
    pub address: SocketAddr,
    pub aliases: Aliases,
    pub acknowledge_deep_links: bool,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let address = var(ADDRESS)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
            .parse()?;

        let aliases = match var(ALIASES) {
            Some(path) => {
                info!("loading aliases from {path}");
                load_aliases(path)?
            }
            None => Aliases::default(),
        };

        let acknowledge_deep_links = match var(ACK_DEEP_LINKS) {
            Some(value) => parse_flag(ACK_DEEP_LINKS, &value)?,
            None => true,
        };

        Ok(Config {
            address,
            aliases,
            acknowledge_deep_links,
        })
    }
}

pub fn load_aliases(path: impl AsRef<Path>) -> Result<Aliases> {
    let data = std::fs::read(path)?;
    parse_aliases(&data)
}

fn parse_aliases(data: &[u8]) -> Result<Aliases> {
    Ok(serde_json::from_slice(data)?)
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool> {
    match value.trim() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(Error::InvalidFlag(name, value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use home::DeviceId;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();

        move |name: &str| pairs.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();

        assert_eq!(config.address, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.aliases, Aliases::default());
        assert!(config.acknowledge_deep_links);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            (ADDRESS, "127.0.0.1:9000"),
            (ACK_DEEP_LINKS, "false"),
        ]))
        .unwrap();

        assert_eq!(config.address, "127.0.0.1:9000".parse().unwrap());
        assert!(!config.acknowledge_deep_links);
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_vars(vars(&[(ADDRESS, "localhost")])).is_err());
        assert!(Config::from_vars(vars(&[(ACK_DEEP_LINKS, "maybe")])).is_err());
        assert!(Config::from_vars(vars(&[(ALIASES, "/nonexistent/aliases.json")])).is_err());
    }

    #[test]
    fn test_parse_aliases() {
        let aliases = parse_aliases(
            br#"{"devices": {"desk": "light/office"}, "commands": {"on": true, "off": false}}"#,
        )
        .unwrap();

        assert_eq!(
            aliases.resolve_device(Some("desk")),
            Some(DeviceId::OFFICE_LIGHT)
        );

        let err = parse_aliases(br#"{"devices": {"hood": "fan/kitchen"}, "commands": {}}"#)
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("aliases point at unknown devices: fan/kitchen"));

        assert!(parse_aliases(br#"{"devices": {"desk": "lamp/office"}, "commands": {}}"#).is_err());
    }
}
