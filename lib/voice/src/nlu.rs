use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct NluResult {
    pub intent: String,

    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Slot {
    #[serde(default, rename = "type")]
    pub slot_type: Option<String>,

    #[serde(default)]
    pub value: Option<Value>,

    #[serde(default, alias = "rawValue")]
    pub raw_value: Option<String>,
}

impl NluResult {
    pub fn new(intent: impl Into<String>) -> NluResult {
        NluResult {
            intent: intent.into(),
            slots: HashMap::new(),
        }
    }

    pub fn with_slot(mut self, name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), Slot::raw(raw_value));
        self
    }

    /// The phrase as it was spoken, if the slot was filled at all.
    pub fn raw_slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name)?.raw_value.as_deref()
    }
}

impl Slot {
    pub fn raw(raw_value: impl Into<String>) -> Slot {
        Slot {
            slot_type: None,
            value: None,
            raw_value: Some(raw_value.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_slice, json, to_vec};

    #[test]
    fn test_result_parsing() {
        let json = json!({
            "intent": "command.control_device",
            "utterance": "turn off the kitchen light",
            "confidence": 0.93,
            "slots": {
                "device": {
                    "type": "entity",
                    "value": "kitchen light",
                    "raw_value": "kitchen light"
                },
                "command": {
                    "type": "selset",
                    "value": "off",
                    "rawValue": "off"
                }
            }
        });
        let json = to_vec(&json).unwrap();

        let result = from_slice::<NluResult>(&json).unwrap();

        assert_eq!(result.intent, "command.control_device");
        assert_eq!(result.slots.len(), 2);
        assert_eq!(result.raw_slot("device"), Some("kitchen light"));
        assert_eq!(result.raw_slot("command"), Some("off"));
        assert_eq!(result.slots["command"].value, Some(json!("off")));
    }

    #[test]
    fn test_missing_slots() {
        let result: NluResult = serde_json::from_value(json!({
            "intent": "greeting"
        }))
        .unwrap();

        assert_eq!(result, NluResult::new("greeting"));
        assert_eq!(result.raw_slot("device"), None);

        let result: NluResult = serde_json::from_value(json!({
            "intent": "command.control_device",
            "slots": {
                "device": { "type": "entity", "value": null }
            }
        }))
        .unwrap();

        assert!(result.slots.contains_key("device"));
        assert_eq!(result.raw_slot("device"), None);
    }

    #[test]
    fn test_with_slot() {
        let result = NluResult::new("command.control_device").with_slot("device", "fan");

        assert_eq!(result.raw_slot("device"), Some("fan"));
        assert_eq!(result.raw_slot("command"), None);
    }
}
