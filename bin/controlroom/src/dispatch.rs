use std::sync::Arc;

use home::{Aliases, DeepLink};
use log::{debug, info};
use serde::Serialize;
use voice::{NluResult, SynthesisRequest};

use crate::speech::SpeechQueue;
use crate::switchboard::{SwitchUpdate, SwitchboardHandle};
use crate::Result;

pub const CONTROL_DEVICE_INTENT: &str = "command.control_device";
pub const ACKNOWLEDGEMENT: &str = "Got it!";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    DeepLink,
    Voice,
}

/// What a single trigger ended up doing.
#[derive(Copy, Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Outcome {
    pub acknowledged: bool,
    pub update: Option<SwitchUpdate>,
}

#[derive(Clone, Debug)]
pub struct Dispatcher {
    aliases: Arc<Aliases>,
    switchboard: SwitchboardHandle,
    speech: SpeechQueue,
    acknowledge_deep_links: bool,
}

impl Dispatcher {
    pub fn new(
        aliases: Arc<Aliases>,
        switchboard: SwitchboardHandle,
        speech: SpeechQueue,
        acknowledge_deep_links: bool,
    ) -> Dispatcher {
        Dispatcher {
            aliases,
            switchboard,
            speech,
            acknowledge_deep_links,
        }
    }

    pub fn switchboard(&self) -> &SwitchboardHandle {
        &self.switchboard
    }

    pub fn deep_link(&self, link: Option<&DeepLink>, origin: Origin) -> Result<Outcome> {
        let Some(link) = link else {
            return Ok(Outcome::default());
        };

        let acknowledged = match origin {
            Origin::Voice => true,
            Origin::DeepLink => self.acknowledge_deep_links,
        };

        if acknowledged {
            self.speech.synthesize(SynthesisRequest::new(ACKNOWLEDGEMENT));
        }

        let device = self.aliases.resolve_device(link.device());
        let on = self.aliases.resolve_command(link.command());
        debug!("{:?} resolved to {:?}, {:?}", link, device, on);

        self.switchboard.apply(device, on)?;

        Ok(Outcome {
            acknowledged,
            update: device.zip(on).map(|(device, on)| SwitchUpdate { device, on }),
        })
    }

    pub fn nlu_result(&self, result: &NluResult) -> Result<Outcome> {
        match link_for_intent(result) {
            Some(link) => self.deep_link(Some(&link), Origin::Voice),
            None => {
                info!("Unsupported intent: {}", result.intent);
                Ok(Outcome::default())
            }
        }
    }
}

/// Voice commands go through the same path as deep links, so the slots are
/// copied into a link as spoken.
pub fn link_for_intent(result: &NluResult) -> Option<DeepLink> {
    if result.intent != CONTROL_DEVICE_INTENT {
        return None;
    }

    Some(DeepLink::new(
        result.raw_slot("device").map(str::to_string),
        result.raw_slot("command").map(str::to_string),
    ))
}
