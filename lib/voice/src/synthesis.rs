use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SynthesisRequest {
    pub id: Uuid,
    pub text: String,
    pub voice: String,
}

impl SynthesisRequest {
    pub const DEFAULT_VOICE: &'static str = "demo-male";

    pub fn new(text: impl Into<String>) -> SynthesisRequest {
        SynthesisRequest {
            id: Uuid::new_v4(),
            text: text.into(),
            voice: Self::DEFAULT_VOICE.to_string(),
        }
    }
}
