use std::fmt;
use std::str::FromStr;

use serde::{
    de::{self, Unexpected},
    Deserialize, Serialize,
};

use crate::{DeviceType, Room};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId {
    pub device_type: DeviceType,
    pub room: Room,
}

impl DeviceId {
    pub const OFFICE_LIGHT: DeviceId = DeviceId::light_at_room(Room::Office);
    pub const KITCHEN_LIGHT: DeviceId = DeviceId::light_at_room(Room::Kitchen);
    pub const OFFICE_FAN: DeviceId = DeviceId::fan_at_room(Room::Office);

    pub const fn light_at_room(room: Room) -> DeviceId {
        DeviceId {
            device_type: DeviceType::Light,
            room,
        }
    }

    pub const fn fan_at_room(room: Room) -> DeviceId {
        DeviceId {
            device_type: DeviceType::Fan,
            room,
        }
    }

    /// Every switch the control room knows about.
    pub const fn all() -> [DeviceId; 3] {
        [
            DeviceId::OFFICE_LIGHT,
            DeviceId::KITCHEN_LIGHT,
            DeviceId::OFFICE_FAN,
        ]
    }

    pub fn is_known(&self) -> bool {
        DeviceId::all().contains(self)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.device_type, self.room)
    }
}

impl FromStr for DeviceId {
    type Err = de::value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use de::IntoDeserializer;

        DeviceId::deserialize(s.into_deserializer())
    }
}

impl Serialize for DeviceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DeviceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DeviceIdVisitor;

        impl<'de> de::Visitor<'de> for DeviceIdVisitor {
            type Value = DeviceId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("device_type/room")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let (device_type, room) = value.split_once('/').ok_or_else(|| {
                    de::Error::invalid_value(Unexpected::Str(value), &"device_type/room")
                })?;

                let device_type = DeviceType::from_str(device_type).map_err(|err| {
                    de::Error::invalid_value(
                        Unexpected::Str(device_type),
                        &err.to_string().as_str(),
                    )
                })?;

                let room = Room::from_str(room).map_err(|err| {
                    de::Error::invalid_value(Unexpected::Str(room), &err.to_string().as_str())
                })?;

                Ok(DeviceId { device_type, room })
            }
        }

        deserializer.deserialize_str(DeviceIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialization() {
        assert_eq!(DeviceId::OFFICE_LIGHT.to_string(), "light/office");
        assert_eq!(DeviceId::KITCHEN_LIGHT.to_string(), "light/kitchen");
        assert_eq!(
            serde_json::to_value(DeviceId::OFFICE_FAN).unwrap(),
            json!("fan/office")
        );
    }

    #[test]
    fn test_deserialization() {
        let id: DeviceId = serde_json::from_value(json!("light/kitchen")).unwrap();
        assert_eq!(id, DeviceId::KITCHEN_LIGHT);

        assert_eq!(
            DeviceId::from_str("fan/office").unwrap(),
            DeviceId::OFFICE_FAN
        );

        assert!(DeviceId::from_str("light").is_err());
        assert!(DeviceId::from_str("lamp/office").is_err());
        assert!(DeviceId::from_str("light/garage").is_err());
    }

    #[test]
    fn test_known_devices() {
        assert!(DeviceId::OFFICE_LIGHT.is_known());
        assert!(DeviceId::OFFICE_FAN.is_known());
        assert!(!DeviceId::fan_at_room(Room::Kitchen).is_known());
    }
}
