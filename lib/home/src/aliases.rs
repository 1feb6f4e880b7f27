use std::collections::HashMap;

use serde::Deserialize;

use crate::{DeviceId, Error};

/// Spoken phrases mapped onto canonical switches and on/off commands.
///
/// Lookups are exact and case-sensitive. Tables are built once and only read
/// afterwards. Every device phrase points at a real switch.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(try_from = "Tables")]
pub struct Aliases {
    devices: HashMap<String, DeviceId>,
    commands: HashMap<String, bool>,
}

#[derive(Deserialize)]
struct Tables {
    devices: HashMap<String, DeviceId>,
    commands: HashMap<String, bool>,
}

impl TryFrom<Tables> for Aliases {
    type Error = Error;

    fn try_from(tables: Tables) -> Result<Self, Self::Error> {
        Aliases::new(tables.devices, tables.commands)
    }
}

impl Aliases {
    pub fn new(
        devices: HashMap<String, DeviceId>,
        commands: HashMap<String, bool>,
    ) -> Result<Aliases, Error> {
        let mut unknown = devices
            .values()
            .filter(|id| !id.is_known())
            .copied()
            .collect::<Vec<_>>();

        if unknown.is_empty() {
            Ok(Aliases { devices, commands })
        } else {
            unknown.sort();
            unknown.dedup();
            Err(Error::UnknownDevices(unknown))
        }
    }

    pub fn resolve_device(&self, phrase: Option<&str>) -> Option<DeviceId> {
        self.devices.get(phrase?).copied()
    }

    /// A phrase that is present but unknown means "on". An absent phrase
    /// resolves to nothing.
    pub fn resolve_command(&self, phrase: Option<&str>) -> Option<bool> {
        let phrase = phrase?;
        Some(self.commands.get(phrase).copied().unwrap_or(true))
    }
}

impl Default for Aliases {
    fn default() -> Self {
        let devices = [
            ("office light", DeviceId::OFFICE_LIGHT),
            ("office", DeviceId::OFFICE_LIGHT),
            ("kitchen light", DeviceId::KITCHEN_LIGHT),
            ("kitchen", DeviceId::KITCHEN_LIGHT),
            ("office fan", DeviceId::OFFICE_FAN),
            ("fan", DeviceId::OFFICE_FAN),
        ]
        .into_iter()
        .map(|(phrase, id)| (phrase.to_string(), id))
        .collect();

        let commands = [("on", true), ("off", false)]
            .into_iter()
            .map(|(phrase, on)| (phrase.to_string(), on))
            .collect();

        Aliases { devices, commands }
    }
}
