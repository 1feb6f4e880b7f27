use std::fmt;

use crate::DeviceId;

#[derive(Debug)]
pub enum Error {
    Uri(url::ParseError),
    Query(serde_urlencoded::de::Error),
    UnknownDevices(Vec<DeviceId>),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Uri(err)
    }
}

impl From<serde_urlencoded::de::Error> for Error {
    fn from(err: serde_urlencoded::de::Error) -> Self {
        Self::Query(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(err) => write!(f, "uri error: {err}"),
            Self::Query(err) => write!(f, "query error: {err}"),
            Self::UnknownDevices(ids) => {
                let ids = ids.iter().map(DeviceId::to_string).collect::<Vec<_>>();
                write!(f, "aliases point at unknown devices: {}", ids.join(", "))
            }
        }
    }
}

impl std::error::Error for Error {}
