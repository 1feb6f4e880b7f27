mod aliases;
mod deep_link;
mod device_id;
mod error;

pub use aliases::Aliases;
pub use deep_link::DeepLink;
pub use device_id::DeviceId;
pub use error::Error;

use serde::{Deserialize, Serialize};
use str_derive::Str;

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Fan,
    Light,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Room {
    Kitchen,
    Office,
}
