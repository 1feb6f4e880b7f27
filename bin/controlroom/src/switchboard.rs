use std::collections::BTreeMap;

use home::DeviceId;
use log::{debug, info};
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

use crate::{Error, Result};

pub type States = BTreeMap<DeviceId, bool>;

/// A resolved request to flip one switch.
#[derive(Copy, Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SwitchUpdate {
    pub device: DeviceId,
    pub on: bool,
}

/// On/off state of every known switch. All switches start off.
#[derive(Clone, Debug, PartialEq)]
pub struct Switchboard {
    states: States,
}

impl Switchboard {
    pub fn new() -> Switchboard {
        Switchboard {
            states: DeviceId::all().into_iter().map(|id| (id, false)).collect(),
        }
    }

    /// Sets the switch only when both halves resolved.
    pub fn apply(&mut self, device: Option<DeviceId>, on: Option<bool>) -> Option<SwitchUpdate> {
        let (device, on) = (device?, on?);

        let state = self.states.get_mut(&device)?;
        *state = on;

        Some(SwitchUpdate { device, on })
    }

    pub fn states(&self) -> &States {
        &self.states
    }
}

impl Default for Switchboard {
    fn default() -> Self {
        Switchboard::new()
    }
}

enum Message {
    Apply {
        device: Option<DeviceId>,
        on: Option<bool>,
    },
    Snapshot(oneshot::Sender<States>),
}

/// Cheap to clone; every clone feeds the same switchboard task.
#[derive(Clone, Debug)]
pub struct SwitchboardHandle {
    tx: mpsc::UnboundedSender<Message>,
}

pub struct SwitchboardTask {
    switchboard: Switchboard,
    rx: mpsc::UnboundedReceiver<Message>,
}

pub fn channel() -> (SwitchboardHandle, SwitchboardTask) {
    let (tx, rx) = mpsc::unbounded_channel();

    let task = SwitchboardTask {
        switchboard: Switchboard::new(),
        rx,
    };

    (SwitchboardHandle { tx }, task)
}

impl SwitchboardHandle {
    /// Queues the update for the switchboard task and returns without waiting
    /// for it to land.
    pub fn apply(&self, device: Option<DeviceId>, on: Option<bool>) -> Result<()> {
        self.tx
            .send(Message::Apply { device, on })
            .map_err(|_| Error::QueueClosed("switchboard"))
    }

    /// States as of every update queued before this call.
    pub async fn snapshot(&self) -> Result<States> {
        let (tx, rx) = oneshot::channel();

        self.tx
            .send(Message::Snapshot(tx))
            .map_err(|_| Error::QueueClosed("switchboard"))?;

        rx.await.map_err(|_| Error::QueueClosed("switchboard"))
    }
}

impl SwitchboardTask {
    /// Owns the switch states until every handle is dropped, then hands them
    /// back.
    pub async fn run(mut self) -> Switchboard {
        while let Some(message) = self.rx.recv().await {
            match message {
                Message::Apply { device, on } => {
                    match self.switchboard.apply(device, on) {
                        Some(SwitchUpdate { device, on }) => {
                            info!("{device} switched {}", if on { "on" } else { "off" })
                        }
                        None => debug!("nothing to apply for {device:?}, {on:?}"),
                    }
                }
                Message::Snapshot(reply) => {
                    let _ = reply.send(self.switchboard.states().clone());
                }
            }
        }

        self.switchboard
    }
}
