use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    AddrParse(std::net::AddrParseError),
    Link(home::Error),
    InvalidFlag(&'static str, String),
    QueueClosed(&'static str),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<std::net::AddrParseError> for Error {
    fn from(err: std::net::AddrParseError) -> Self {
        Self::AddrParse(err)
    }
}

impl From<home::Error> for Error {
    fn from(err: home::Error) -> Self {
        Self::Link(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::AddrParse(err) => write!(f, "address parse error: {err}"),
            Self::Link(err) => write!(f, "deep link error: {err}"),
            Self::InvalidFlag(name, value) => {
                write!(f, "{name} must be true or false, got {value:?}")
            }
            Self::QueueClosed(queue) => write!(f, "{queue} queue closed"),
        }
    }
}

impl std::error::Error for Error {}
