use serde::Serialize;

use crate::core::config::inference;

/// Body of a text-to-image inference call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRequest<'a> {
    pub inputs: &'a str,
    pub parameters: GenerationParameters,
}

/// Generation knobs sent with every request. Not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            num_inference_steps: inference::NUM_INFERENCE_STEPS,
            guidance_scale: inference::GUIDANCE_SCALE,
            width: inference::WIDTH,
            height: inference::HEIGHT,
        }
    }
}

impl<'a> ImageRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            inputs: prompt,
            parameters: GenerationParameters::default(),
        }
    }
}
