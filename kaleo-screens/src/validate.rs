//! One-shot pass validation command.

use kaleo_api::models::{PassValidationMethod, PassValidationRequest, PassValidationStatus};
use kaleo_core::Context;

use crate::ScreenMeta;

pub const META: ScreenMeta = ScreenMeta {
    name: "validate",
    desc: "Validate a manually entered pass code.",
    usage: "validate <program-id> <code>",
};

/// Submit one manual pass code for validation and describe the outcome.
pub async fn run(ctx: &Context, program_id: &str, code: &str) -> String {
    let request = PassValidationRequest {
        program_id: program_id.to_owned(),
        qr_code_id: None,
        manual_code: Some(code.to_owned()),
        method: PassValidationMethod::Manual,
    };

    match ctx.api.validate_pass(&request).await {
        Ok(response) => {
            let verdict = match response.status {
                PassValidationStatus::Valid => "VALID",
                PassValidationStatus::Invalid => "INVALID",
                PassValidationStatus::Expired => "EXPIRED",
            };

            match response.message {
                Some(message) => format!("Pass {}: {verdict}. {message}", response.pass_id),
                None => format!("Pass {}: {verdict}", response.pass_id),
            }
        }
        Err(error) => format!("Validation failed: {error}"),
    }
}
