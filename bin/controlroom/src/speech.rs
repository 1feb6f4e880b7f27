use log::{info, warn};
use tokio::sync::mpsc;
use voice::SynthesisRequest;

/// Fire-and-forget front of the synthesizer. Requests are handed to the speech
/// task and never awaited.
#[derive(Clone, Debug)]
pub struct SpeechQueue {
    tx: mpsc::UnboundedSender<SynthesisRequest>,
}

pub struct SpeechTask {
    rx: mpsc::UnboundedReceiver<SynthesisRequest>,
}

pub fn channel() -> (SpeechQueue, SpeechTask) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SpeechQueue { tx }, SpeechTask { rx })
}

impl SpeechQueue {
    pub fn synthesize(&self, request: SynthesisRequest) {
        let id = request.id;

        if self.tx.send(request).is_err() {
            warn!("speech task is gone, dropping synthesis request {id}");
        }
    }
}

impl SpeechTask {
    pub async fn run(mut self) {
        while let Some(request) = self.rx.recv().await {
            info!(
                "speaking [{}] as {}: {}",
                request.id, request.voice, request.text
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn try_next(&mut self) -> Option<SynthesisRequest> {
        self.rx.try_recv().ok()
    }
}
