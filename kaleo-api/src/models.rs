//! Typed request and response models for the service API.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgramStatus {
    Draft,
    Published,
    Cancelled,
    Completed,
}

/// One pass type attached to a program.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassTypeSummary {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub total_available: Option<u64>,
}

/// Organizer-facing program row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSummary {
    pub id: String,
    pub name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub venue: String,
    pub registration_start: Option<String>,
    pub registration_end: Option<String>,
    pub status: ProgramStatus,
    #[serde(default)]
    pub pass_types: Vec<PassTypeSummary>,
}

/// Attendee-facing published program row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedProgramSummary {
    pub id: String,
    pub name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub venue: String,
}

/// Lifecycle status of a purchased pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassStatus {
    Active,
    Purchased,
    Cancelled,
    Used,
}

/// Attendee-facing pass row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassSummary {
    pub id: String,
    pub status: PassStatus,
    pub manual_code: String,
    pub created_at: String,
    pub pass_type_name: String,
    pub pass_type_price: f64,
    pub program_id: String,
    pub program_name: String,
    pub program_start_time: Option<String>,
    pub program_end_time: Option<String>,
    pub program_venue: String,
}

/// Program row offered to validation staff.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffProgramSummary {
    pub id: String,
    pub name: String,
}

/// How a pass was presented for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassValidationMethod {
    QrScan,
    Manual,
}

/// Outcome of a validation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassValidationStatus {
    Valid,
    Invalid,
    Expired,
}

/// Request to validate one presented pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassValidationRequest {
    pub program_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_code: Option<String>,
    pub method: PassValidationMethod,
}

/// Result of a validation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassValidationResponse {
    pub pass_id: String,
    pub status: PassValidationStatus,
    pub message: Option<String>,
}
