use serde::{Deserialize, Serialize};
use url::Url;

use crate::Error;

/// The two raw phrases a control trigger carries, before any alias lookup.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DeepLink {
    pub device: Option<String>,
    pub command: Option<String>,
}

impl DeepLink {
    pub fn new(device: Option<String>, command: Option<String>) -> DeepLink {
        DeepLink { device, command }
    }

    /// Reads `device` and `command` out of a full URI such as
    /// `controlroom://control?device=office&command=on`.
    pub fn parse(uri: &str) -> Result<DeepLink, Error> {
        let url = Url::parse(uri)?;

        match url.query() {
            Some(query) => DeepLink::from_query(query),
            None => Ok(DeepLink::default()),
        }
    }

    /// The first occurrence of each parameter wins; anything else is ignored.
    pub fn from_query(query: &str) -> Result<DeepLink, Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;

        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        Ok(DeepLink {
            device: first("device"),
            command: first("command"),
        })
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }
}
