//! Enhancement pipeline: validate → classify → template → generate → clean.
//!
//! The generator is only reached once validation and classification have both passed.

use tracing::{debug, info};

use crate::enhancement::classifier::classify;
use crate::enhancement::cleanup::clean_response;
use crate::enhancement::template::build_template;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Prompts shorter than this (in chars, after trimming) are rejected.
pub const MIN_PROMPT_CHARS: usize = 5;

pub const INVALID_PROMPT_MESSAGE: &str = "Please provide a valid prompt";
pub const OFF_TOPIC_MESSAGE: &str =
    "This prompt appears to be off-topic. Please describe what you want to create.";

/// Trims and length-checks the raw prompt.
pub fn validate_prompt(raw: Option<&str>) -> Result<&str, AppError> {
    let prompt = raw.map(str::trim).unwrap_or_default();
    if prompt.chars().count() < MIN_PROMPT_CHARS {
        return Err(AppError::Validation(INVALID_PROMPT_MESSAGE.to_string()));
    }
    Ok(prompt)
}

/// Runs the full enhancement pipeline for one request.
pub async fn enhance(generator: &dyn TextGenerator, raw: Option<&str>) -> Result<String, AppError> {
    let prompt = validate_prompt(raw)?;

    let classification = classify(prompt);
    if classification.is_invalid() {
        info!("Rejected off-topic prompt");
        return Err(AppError::Validation(OFF_TOPIC_MESSAGE.to_string()));
    }
    info!("Classified prompt as {}", classification.category);

    let template = build_template(&classification, prompt);
    debug!("Built enhancement template ({} chars)", template.len());

    let raw_output = generator
        .generate(&template)
        .await
        .map_err(|e| AppError::Llm(format!("Enhancement failed: {e}")))?;

    Ok(clean_response(&raw_output))
}
