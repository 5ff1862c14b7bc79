// Prompt enhancement: keyword classification, template building, output cleanup.
// All model calls go through the `TextGenerator` trait — no direct Gemini calls here.

pub mod classifier;
pub mod cleanup;
pub mod enhancer;
pub mod handlers;
pub mod template;
