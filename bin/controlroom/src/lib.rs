mod config;
mod dispatch;
mod error;
mod speech;
mod switchboard;
mod web_service;

pub use config::{load_aliases, Config};
pub use dispatch::{link_for_intent, Dispatcher, Origin, Outcome};
pub use dispatch::{ACKNOWLEDGEMENT, CONTROL_DEVICE_INTENT};
pub use error::Error;
pub use speech::{SpeechQueue, SpeechTask};
pub use switchboard::{States, SwitchUpdate, Switchboard, SwitchboardHandle, SwitchboardTask};
pub use web_service::router;

pub mod channels {
    pub use crate::speech::channel as speech;
    pub use crate::switchboard::channel as switchboard;
}

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
