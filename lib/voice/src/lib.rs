//! Types exchanged with the speech pipeline: what the NLU recognized in an
//! utterance, and what we ask the synthesizer to say back.

mod nlu;
mod synthesis;

pub use nlu::{NluResult, Slot};
pub use synthesis::SynthesisRequest;
